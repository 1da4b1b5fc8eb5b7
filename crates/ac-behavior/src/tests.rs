//! Unit tests for ac-behavior.

use std::collections::{BTreeSet, HashSet};

use ac_agent::{Action, AgentState, Need, NeedsSystem};
use ac_core::{AgentId, Bounds, DirectoryId, Position, RandomSource, Tick, TickInfo, TimeOfDay};
use ac_world::{Capability, Resource, ResourceDirectory, ResourceRef, World, WorldBuilder, WorldQuery};

use crate::BehaviorContext;

// ── Test doubles ──────────────────────────────────────────────────────────────

/// Replays a fixed list of unit draws, cycling when exhausted.
struct Scripted {
    draws: Vec<f64>,
    next:  usize,
}

impl Scripted {
    fn new(draws: &[f64]) -> Self {
        Self { draws: draws.to_vec(), next: 0 }
    }
}

impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        let v = self.draws[self.next % self.draws.len()];
        self.next += 1;
        v
    }
}

/// Delegates to a real world but refuses `acquire` on chosen resources,
/// as if another agent had slipped in between lookup and reservation.
struct Refusing {
    inner:  World,
    refuse: HashSet<ResourceRef>,
}

impl WorldQuery for Refusing {
    fn directory_ids(&self) -> Vec<DirectoryId> {
        self.inner.directory_ids()
    }
    fn available_capabilities(&self, dir: DirectoryId) -> BTreeSet<&str> {
        self.inner.available_capabilities(dir)
    }
    fn find_available(&self, dir: DirectoryId, cap: &str, agent: AgentId) -> Option<ResourceRef> {
        self.inner.find_available(dir, cap, agent)
    }
    fn entrance(&self, dir: DirectoryId) -> Option<Position> {
        self.inner.entrance(dir)
    }
    fn resource_position(&self, r: ResourceRef) -> Option<Position> {
        self.inner.resource_position(r)
    }
    fn satisfaction_rate(&self, r: ResourceRef, cap: &str) -> Option<f32> {
        self.inner.satisfaction_rate(r, cap)
    }
    fn is_occupant(&self, r: ResourceRef, agent: AgentId) -> bool {
        self.inner.is_occupant(r, agent)
    }
    fn acquire(&mut self, r: ResourceRef, agent: AgentId) -> bool {
        !self.refuse.contains(&r) && self.inner.acquire(r, agent)
    }
    fn release(&mut self, r: ResourceRef, agent: AgentId) {
        self.inner.release(r, agent)
    }
    fn random_position(&self, rng: &mut dyn RandomSource) -> Position {
        self.inner.random_position(rng)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

const HOUSE: DirectoryId = DirectoryId(0);
const PARK: DirectoryId = DirectoryId(1);

fn bed_ref() -> ResourceRef {
    ResourceRef::new(HOUSE, ac_core::ResourceId(0))
}

fn tick() -> TickInfo {
    TickInfo::new(Tick(0), 1.0 / 60.0, TimeOfDay::Morning)
}

/// A house holding one capacity-1 bed and a kitchen.
fn house() -> ResourceDirectory {
    ResourceDirectory::new("house", Bounds::new(50.0, 50.0, 60.0, 80.0))
        .with_resource(Resource::new(
            "bed",
            Position::new(70.0, 70.0),
            vec![Capability::new("resting_place", 1, 20.0)],
        ))
        .with_resource(Resource::new(
            "kitchen",
            Position::new(90.0, 100.0),
            vec![Capability::new("food_source", 2, 40.0)],
        ))
}

fn park() -> ResourceDirectory {
    ResourceDirectory::new("park", Bounds::new(300.0, 350.0, 150.0, 100.0)).with_resource(
        Resource::new(
            "bench",
            Position::new(320.0, 370.0),
            vec![
                Capability::new("social_space", 2, 15.0),
                Capability::new("resting_place", 2, 5.0),
            ],
        ),
    )
}

fn world_of(dirs: Vec<ResourceDirectory>) -> World {
    let mut b = WorldBuilder::new(Bounds::sized(800.0, 600.0));
    for d in dirs {
        b.add_directory(d);
    }
    b.build().unwrap()
}

fn agent_with(id: u32, needs: &[(&str, f32)]) -> AgentState {
    let mut a = AgentState::new(AgentId(id), format!("agent{id}"), Position::new(400.0, 300.0));
    for &(name, value) in needs {
        a.needs.get_mut(name).unwrap().set(value);
    }
    a
}

fn step(
    b: &mut dyn crate::Behavior,
    agent: &mut AgentState,
    world: &mut dyn WorldQuery,
    rng: &mut dyn RandomSource,
) {
    let mut ctx = BehaviorContext::new(tick(), world, rng);
    b.update(agent, &mut ctx);
}

fn arbiter_tick(
    arb: &mut crate::Arbiter,
    agent: &mut AgentState,
    world: &mut dyn WorldQuery,
    rng: &mut dyn RandomSource,
) {
    let mut ctx = BehaviorContext::new(tick(), world, rng);
    arb.tick(agent, &mut ctx);
}

/// Walk the agent until it has no destination.
fn walk(agent: &mut AgentState) {
    while agent.has_destination() {
        agent.advance_movement();
    }
}

// ── NeedBehavior ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod need_behavior {
    use super::*;
    use crate::{Behavior, NeedBehavior};

    #[test]
    fn activates_at_or_below_threshold() {
        let eat = NeedBehavior::eat();
        let mut rng = Scripted::new(&[0.5]);
        assert!(eat.should_activate(&agent_with(0, &[("hunger", 60.0)]), &mut rng));
        assert!(!eat.should_activate(&agent_with(0, &[("hunger", 61.0)]), &mut rng));
    }

    #[test]
    fn unknown_need_never_activates() {
        let b = NeedBehavior::new("drink", "thirst", "water", 50.0, 20.0);
        let mut rng = Scripted::new(&[0.5]);
        assert!(!b.should_activate(&agent_with(0, &[("energy", 0.0)]), &mut rng));
        assert_eq!(b.priority(&agent_with(0, &[])), 0.0);
    }

    #[test]
    fn priority_adds_critical_bonus() {
        let rest = NeedBehavior::rest();
        assert_eq!(rest.priority(&agent_with(0, &[("energy", 45.0)])), 55.0);
        assert_eq!(rest.priority(&agent_with(0, &[("energy", 20.0)])), 130.0);
        assert_eq!(rest.priority(&agent_with(0, &[("energy", 21.0)])), 79.0);
    }

    #[test]
    fn activation_reserves_and_heads_for_entrance() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut agent = agent_with(0, &[("energy", 30.0)]);
        let mut rest = NeedBehavior::rest();

        step(&mut rest, &mut agent, &mut world, &mut rng);

        assert!(rest.is_active());
        assert_eq!(rest.reservation(), Some(bed_ref()));
        assert_eq!(rest.state().target_position, Some(Position::new(70.0, 70.0)));
        assert_eq!(agent.destination, Some(Position::new(80.0, 130.0)));
        assert_eq!(agent.current_action, Action::Seeking("energy".into()));
        assert!(world.is_occupant(bed_ref(), agent.id));
        assert!(rest.usage().is_none());
    }

    #[test]
    fn no_resource_anywhere_stays_inactive() {
        let mut world = world_of(vec![park()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut agent = agent_with(0, &[("hunger", 30.0)]);
        let mut eat = NeedBehavior::eat();

        step(&mut eat, &mut agent, &mut world, &mut rng);

        assert!(!eat.is_active());
        assert_eq!(eat.reservation(), None);
        assert_eq!(agent.current_action, Action::Idle);
        assert!(!agent.has_destination());
    }

    #[test]
    fn refused_acquire_continues_scan() {
        let mut world = Refusing {
            inner:  world_of(vec![house(), park()]),
            refuse: HashSet::from([bed_ref()]),
        };
        let mut rng = Scripted::new(&[0.5]);
        let mut agent = agent_with(0, &[("energy", 30.0)]);
        let mut rest = NeedBehavior::rest();

        step(&mut rest, &mut agent, &mut world, &mut rng);

        assert_eq!(rest.reservation().map(|r| r.directory), Some(PARK));
        assert!(!world.is_occupant(bed_ref(), agent.id));
    }

    #[test]
    fn second_agent_falls_through_to_next_building() {
        let mut world = world_of(vec![house(), park()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut a = agent_with(0, &[("energy", 30.0)]);
        let mut b = agent_with(1, &[("energy", 30.0)]);
        let mut rest_a = NeedBehavior::rest();
        let mut rest_b = NeedBehavior::rest();

        step(&mut rest_a, &mut a, &mut world, &mut rng);
        step(&mut rest_b, &mut b, &mut world, &mut rng);

        assert_eq!(rest_a.reservation(), Some(bed_ref()));
        assert_eq!(rest_b.reservation().map(|r| r.directory), Some(PARK));
        assert_eq!(world.resource(bed_ref()).unwrap().occupancy(), 1);
    }

    #[test]
    fn second_agent_abandons_when_only_bed_taken() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut a = agent_with(0, &[("energy", 30.0)]);
        let mut b = agent_with(1, &[("energy", 30.0)]);
        let mut rest_a = NeedBehavior::rest();
        let mut rest_b = NeedBehavior::rest();

        step(&mut rest_a, &mut a, &mut world, &mut rng);
        step(&mut rest_b, &mut b, &mut world, &mut rng);

        assert!(rest_a.is_active());
        assert!(!rest_b.is_active());
        assert!(world.is_occupant(bed_ref(), a.id));
        assert!(!world.is_occupant(bed_ref(), b.id));
    }

    #[test]
    fn arriving_at_entrance_switches_to_using() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut agent = agent_with(0, &[("energy", 30.0)]);
        let mut rest = NeedBehavior::rest();

        step(&mut rest, &mut agent, &mut world, &mut rng);
        walk(&mut agent);
        step(&mut rest, &mut agent, &mut world, &mut rng);

        assert_eq!(rest.state().ticks_active, 1);
        assert_eq!(agent.current_action, Action::Using("energy".into()));
        assert_eq!(agent.destination, Some(Position::new(70.0, 70.0)));
        let usage = rest.usage().unwrap();
        assert_eq!(usage.need, "energy");
        assert_eq!(usage.capability, "resting_place");
        assert_eq!(usage.resource, bed_ref());
    }

    #[test]
    fn satisfied_need_releases_and_goes_idle() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut agent = agent_with(0, &[("energy", 30.0)]);
        let mut rest = NeedBehavior::rest();

        step(&mut rest, &mut agent, &mut world, &mut rng);
        walk(&mut agent);
        step(&mut rest, &mut agent, &mut world, &mut rng);
        walk(&mut agent);
        agent.needs.satisfy("energy", 70.0);
        step(&mut rest, &mut agent, &mut world, &mut rng);

        assert!(!rest.is_active());
        assert_eq!(rest.reservation(), None);
        assert_eq!(agent.current_action, Action::Idle);
        assert_eq!(world.resource(bed_ref()).unwrap().occupancy(), 0);
    }

    #[test]
    fn still_active_below_satisfaction() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut agent = agent_with(0, &[("energy", 30.0)]);
        let mut rest = NeedBehavior::rest();

        step(&mut rest, &mut agent, &mut world, &mut rng);
        agent.needs.satisfy("energy", 64.0);
        step(&mut rest, &mut agent, &mut world, &mut rng);
        assert!(rest.is_active());
    }

    #[test]
    fn deactivate_releases_reservation() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut agent = agent_with(0, &[("energy", 30.0)]);
        let mut rest = NeedBehavior::rest();

        step(&mut rest, &mut agent, &mut world, &mut rng);
        rest.deactivate(agent.id, &mut world);

        assert!(!rest.is_active());
        assert_eq!(*rest.state(), crate::BehaviorState::default());
        assert!(!world.is_occupant(bed_ref(), agent.id));
    }
}

// ── WanderingBehavior ─────────────────────────────────────────────────────────

#[cfg(test)]
mod wandering {
    use super::*;
    use crate::{Behavior, WanderingBehavior};

    #[test]
    fn trial_uses_injected_randomness() {
        let w = WanderingBehavior::default();
        let agent = agent_with(0, &[]);
        assert!(w.should_activate(&agent, &mut Scripted::new(&[0.05])));
        assert!(!w.should_activate(&agent, &mut Scripted::new(&[0.5])));
    }

    #[test]
    fn not_eligible_when_busy_or_needy() {
        let w = WanderingBehavior::default();
        let mut rng = Scripted::new(&[0.0]);

        let needy = agent_with(0, &[("social", 49.0)]);
        assert!(!w.should_activate(&needy, &mut rng));
        assert_eq!(w.priority(&needy), 0.0);

        let mut busy = agent_with(0, &[]);
        busy.current_action = Action::Seeking("hunger".into());
        assert!(!w.should_activate(&busy, &mut rng));

        let content = agent_with(0, &[("social", 50.0)]);
        assert_eq!(w.priority(&content), 10.0);
    }

    #[test]
    fn activation_targets_inner_region() {
        let mut world = world_of(vec![]);
        let mut rng = Scripted::new(&[0.0, 0.999]);
        let mut agent = agent_with(0, &[]);
        let mut w = WanderingBehavior::default();

        step(&mut w, &mut agent, &mut world, &mut rng);

        let target = agent.destination.unwrap();
        assert!(w.is_active());
        assert_eq!(agent.current_action, Action::Wandering);
        assert!((80.0..=720.0).contains(&target.x));
        assert!((60.0..=540.0).contains(&target.y));
    }

    #[test]
    fn stops_on_arrival() {
        let mut world = world_of(vec![]);
        let mut rng = Scripted::new(&[0.5]);
        let mut agent = agent_with(0, &[]);
        let mut w = WanderingBehavior::default();

        step(&mut w, &mut agent, &mut world, &mut rng);
        walk(&mut agent);
        step(&mut w, &mut agent, &mut world, &mut rng);

        assert!(!w.is_active());
        assert_eq!(agent.current_action, Action::Idle);
    }

    #[test]
    fn gives_up_after_max_ticks() {
        let mut world = world_of(vec![]);
        let mut rng = Scripted::new(&[0.99]);
        let mut agent = agent_with(0, &[]);
        agent.speed = 0.0;
        let mut w = WanderingBehavior::new(0.1, 10.0, 3);

        step(&mut w, &mut agent, &mut world, &mut rng);
        for _ in 0..3 {
            step(&mut w, &mut agent, &mut world, &mut rng);
            assert!(w.is_active());
        }
        step(&mut w, &mut agent, &mut world, &mut rng);

        assert!(!w.is_active());
        assert!(!agent.has_destination());
    }
}

// ── Arbiter ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arbiter {
    use super::*;
    use crate::{Arbiter, Behavior, BehaviorError, NeedBehavior};

    fn custom(name: &str, need: &str) -> Box<NeedBehavior> {
        Box::new(NeedBehavior::new(name, need, "resting_place", 100.0, 0.0))
    }

    fn two_need_agent(a: f32, b: f32) -> AgentState {
        let needs = NeedsSystem::new([
            ("first", Need::with_value(a, 1.0)),
            ("second", Need::with_value(b, 1.0)),
        ])
        .unwrap();
        AgentState::with_needs(AgentId(0), "x", Position::default(), needs)
    }

    #[test]
    fn higher_priority_wins_regardless_of_order() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut arb = Arbiter::new(vec![custom("a", "first"), custom("b", "second")]);
        // priorities 15 and 45
        let mut agent = two_need_agent(85.0, 55.0);

        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        assert_eq!(arb.active_name(), Some("b"));
    }

    #[test]
    fn critical_hunger_beats_listed_earlier_rest() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.9]);
        let mut arb = Arbiter::standard();
        let mut agent = agent_with(0, &[("hunger", 15.0), ("energy", 45.0)]);

        let names: Vec<&str> = arb.behaviors().iter().map(|b| b.name()).collect();
        assert_eq!(&names[..2], &["rest", "eat"]);
        assert_eq!(arb.behaviors()[0].priority(&agent), 55.0);
        assert_eq!(arb.behaviors()[1].priority(&agent), 135.0);

        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        assert_eq!(arb.active_name(), Some("eat"));
    }

    #[test]
    fn from_names_keeps_given_order() {
        let arb = Arbiter::from_names(&["wander", "socialize"]).unwrap();
        let names: Vec<&str> = arb.behaviors().iter().map(|b| b.name()).collect();
        assert_eq!(names, ["wander", "socialize"]);
        assert_eq!(arb.active_name(), None);
    }

    #[test]
    fn from_names_rejects_bad_lists() {
        assert!(matches!(
            Arbiter::from_names(&["eat", "fly"]),
            Err(BehaviorError::UnknownBehavior(name)) if name == "fly"
        ));
        assert!(matches!(
            Arbiter::from_names(&["rest", "rest"]),
            Err(BehaviorError::Config(_))
        ));
        assert!(matches!(Arbiter::from_names::<&str>(&[]), Err(BehaviorError::Config(_))));
    }

    #[test]
    fn ties_go_to_earlier_candidate() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut arb = Arbiter::new(vec![custom("a", "first"), custom("b", "second")]);
        let mut agent = two_need_agent(40.0, 40.0);

        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        assert_eq!(arb.active_name(), Some("a"));
    }

    #[test]
    fn selection_then_activation_next_tick() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut arb = Arbiter::standard();
        let mut agent = agent_with(0, &[("hunger", 50.0)]);

        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        assert_eq!(arb.active_name(), Some("eat"));
        assert_eq!(arb.active_count(), 0);
        assert_eq!(agent.current_action, Action::Idle);

        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        assert_eq!(arb.active_count(), 1);
        assert_eq!(agent.current_action, Action::Seeking("hunger".into()));
    }

    #[test]
    fn failed_activation_clears_slot() {
        let mut world = world_of(vec![park()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut arb = Arbiter::standard();
        let mut agent = agent_with(0, &[("hunger", 50.0)]);

        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        assert_eq!(arb.active_name(), None);
    }

    #[test]
    fn nothing_eligible_stays_idle() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.9]);
        let mut arb = Arbiter::standard();
        let mut agent = agent_with(0, &[]);

        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        assert_eq!(arb.active_name(), None);
        assert!(agent.current_action.is_idle());
    }

    #[test]
    fn active_behavior_is_not_preempted() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut arb = Arbiter::standard();
        let mut agent = agent_with(0, &[("hunger", 55.0)]);

        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        assert_eq!(arb.active_name(), Some("eat"));

        agent.needs.get_mut("energy").unwrap().set(5.0);
        for _ in 0..5 {
            arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
            assert_eq!(arb.active_name(), Some("eat"));
        }
    }

    #[test]
    fn interrupt_releases_and_idles() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut arb = Arbiter::standard();
        let mut agent = agent_with(0, &[("energy", 10.0)]);

        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        assert!(world.is_occupant(bed_ref(), agent.id));

        arb.interrupt(&mut agent, &mut world);

        assert_eq!(arb.active_name(), None);
        assert_eq!(arb.active_count(), 0);
        assert!(!world.is_occupant(bed_ref(), agent.id));
        assert_eq!(agent.current_action, Action::Idle);
        assert!(!agent.has_destination());
    }

    #[test]
    fn usage_reported_only_while_using() {
        let mut world = world_of(vec![house()]);
        let mut rng = Scripted::new(&[0.5]);
        let mut arb = Arbiter::standard();
        let mut agent = agent_with(0, &[("energy", 10.0)]);

        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        assert!(arb.usage().is_none());

        walk(&mut agent);
        arbiter_tick(&mut arb, &mut agent, &mut world, &mut rng);
        assert_eq!(arb.usage().map(|u| u.resource), Some(bed_ref()));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arbitration_properties {
    use ac_core::SimRng;
    use proptest::prelude::*;

    use super::*;
    use crate::Arbiter;

    proptest! {
        /// Three agents competing over one house and one park never hold more
        /// than one active behavior each, and never overfill a resource.
        #[test]
        fn one_active_and_capacity_respected(
            seed in any::<u64>(),
            start in proptest::collection::vec(0.0f32..100.0, 9),
            ticks in 1usize..300,
        ) {
            let mut world = world_of(vec![house(), park()]);
            let mut rng = SimRng::new(seed);
            let mut agents: Vec<(AgentState, Arbiter)> = (0..3u32)
                .map(|i| {
                    let s = &start[i as usize * 3..i as usize * 3 + 3];
                    let a = agent_with(i, &[("energy", s[0]), ("hunger", s[1]), ("social", s[2])]);
                    (a, Arbiter::standard())
                })
                .collect();

            for _ in 0..ticks {
                for (agent, arb) in &mut agents {
                    agent.needs.update(1.0 / 60.0);
                    arbiter_tick(arb, agent, &mut world, &mut rng);
                    agent.advance_movement();
                    prop_assert!(arb.active_count() <= 1);
                }
                prop_assert!(world.over_capacity().is_empty());
            }

            for (agent, arb) in &mut agents {
                arb.interrupt(agent, &mut world);
            }
            for (_, r) in world.resources() {
                prop_assert_eq!(r.occupancy(), 0);
            }
        }
    }
}
