//! The six-slot team and generation-checked completion

use crate::record::CreatureRecord;
use crate::slot::{SlotId, SlotTicket, TEAM_SIZE};

/// Outcome of [`Team::complete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The record replaced whatever the slot held
    Applied,
    /// The lookup was current but produced nothing; the slot is unchanged
    Failed,
    /// A newer lookup was issued for the slot; the result was dropped
    Stale,
}

/// One panel's state
#[derive(Debug, Clone, Default)]
pub struct Slot {
    /// Generation of the most recently issued ticket (0 = never queried)
    generation: u64,
    record: Option<CreatureRecord>,
}

impl Slot {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn record(&self) -> Option<&CreatureRecord> {
        self.record.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_none()
    }
}

/// Six independent slots.
///
/// Lookups run off the UI thread and may finish in any order. Each one
/// carries the [`SlotTicket`] it was issued with; only a ticket matching
/// the slot's latest generation may change the slot.
#[derive(Debug, Clone, Default)]
pub struct Team {
    slots: [Slot; TEAM_SIZE],
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a lookup for `slot`, superseding any lookup still in flight
    pub fn begin_query(&mut self, slot: SlotId) -> SlotTicket {
        let state = &mut self.slots[slot.index()];
        state.generation += 1;

        SlotTicket {
            slot,
            generation: state.generation,
        }
    }

    /// Apply the result of a lookup
    pub fn complete(&mut self, ticket: SlotTicket, result: Option<CreatureRecord>) -> Completion {
        let state = &mut self.slots[ticket.slot.index()];

        if ticket.generation != state.generation {
            tracing::debug!(
                slot = %ticket.slot,
                generation = ticket.generation,
                latest = state.generation,
                "Dropping stale lookup result"
            );
            return Completion::Stale;
        }

        match result {
            Some(record) => {
                state.record = Some(record);
                Completion::Applied
            }
            None => Completion::Failed,
        }
    }

    pub fn slot(&self, slot: SlotId) -> &Slot {
        &self.slots[slot.index()]
    }

    pub fn record(&self, slot: SlotId) -> Option<&CreatureRecord> {
        self.slot(slot).record()
    }

    pub fn generation(&self, slot: SlotId) -> u64 {
        self.slot(slot).generation()
    }

    /// Slots in display order
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Slot)> {
        SlotId::ALL.into_iter().zip(self.slots.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TypeRelations;

    fn record(name: &str, strengths: &[&str], weaknesses: &[&str]) -> CreatureRecord {
        let mut relations = TypeRelations::new();
        relations.extend(strengths.iter().copied(), weaknesses.iter().copied());

        CreatureRecord::new(name.into(), vec!["fire".into()], vec!["ember".into()], None)
            .with_relations(relations)
    }

    #[test]
    fn test_new_team_is_empty() {
        let team = Team::new();

        assert_eq!(team.iter().count(), TEAM_SIZE);
        for (_, slot) in team.iter() {
            assert!(slot.is_empty());
            assert_eq!(slot.generation(), 0);
        }
    }

    #[test]
    fn test_complete_applies_current_ticket() {
        let mut team = Team::new();
        let slot = SlotId::ALL[2];

        let ticket = team.begin_query(slot);
        assert_eq!(ticket.generation, 1);

        let outcome = team.complete(ticket, Some(record("charmander", &["grass"], &["water"])));

        assert_eq!(outcome, Completion::Applied);
        assert_eq!(team.record(slot).unwrap().name, "charmander");
    }

    #[test]
    fn test_failed_lookup_keeps_previous_record() {
        let mut team = Team::new();
        let slot = SlotId::ALL[0];

        let first = team.begin_query(slot);
        team.complete(first, Some(record("charmander", &["grass"], &["water"])));

        let second = team.begin_query(slot);
        let outcome = team.complete(second, None);

        assert_eq!(outcome, Completion::Failed);
        assert_eq!(team.record(slot).unwrap().name, "charmander");
    }

    #[test]
    fn test_failed_lookup_on_empty_slot() {
        let mut team = Team::new();
        let slot = SlotId::ALL[4];

        let ticket = team.begin_query(slot);
        assert_eq!(team.complete(ticket, None), Completion::Failed);
        assert!(team.slot(slot).is_empty());
    }

    #[test]
    fn test_requery_replaces_record_and_relations() {
        let mut team = Team::new();
        let slot = SlotId::ALL[1];

        let first = team.begin_query(slot);
        team.complete(
            first,
            Some(record("charizard", &["grass", "fighting"], &["rock"])),
        );

        let second = team.begin_query(slot);
        team.complete(second, Some(record("magikarp", &[], &[])));

        let current = team.record(slot).unwrap();
        assert_eq!(current.name, "magikarp");
        assert!(current.relations.is_empty());
    }

    #[test]
    fn test_out_of_order_completion_is_dropped() {
        let mut team = Team::new();
        let slot = SlotId::ALL[3];

        let older = team.begin_query(slot);
        let newer = team.begin_query(slot);

        assert_eq!(
            team.complete(newer, Some(record("pikachu", &["water"], &["ground"]))),
            Completion::Applied
        );
        // Older lookup finishes last
        assert_eq!(
            team.complete(older, Some(record("raichu", &[], &[]))),
            Completion::Stale
        );

        assert_eq!(team.record(slot).unwrap().name, "pikachu");
    }

    #[test]
    fn test_stale_failure_does_not_count() {
        let mut team = Team::new();
        let slot = SlotId::ALL[3];

        let older = team.begin_query(slot);
        let newer = team.begin_query(slot);

        assert_eq!(team.complete(older, None), Completion::Stale);
        assert_eq!(
            team.complete(newer, Some(record("eevee", &[], &["fighting"]))),
            Completion::Applied
        );
    }

    #[test]
    fn test_superseded_slot_ignores_older_result_until_newer_arrives() {
        let mut team = Team::new();
        let slot = SlotId::ALL[0];

        let older = team.begin_query(slot);
        let _newer = team.begin_query(slot);

        assert_eq!(
            team.complete(older, Some(record("bulbasaur", &[], &[]))),
            Completion::Stale
        );
        assert!(team.slot(slot).is_empty());
    }

    #[test]
    fn test_slots_are_independent() {
        let mut team = Team::new();
        let a = SlotId::ALL[0];
        let b = SlotId::ALL[5];

        let ticket_a = team.begin_query(a);
        let ticket_b = team.begin_query(b);
        assert_eq!(ticket_a.generation, ticket_b.generation);

        team.complete(ticket_b, Some(record("squirtle", &["fire"], &["grass"])));
        team.complete(ticket_a, Some(record("bulbasaur", &["water"], &["fire"])));

        assert_eq!(team.record(a).unwrap().name, "bulbasaur");
        assert_eq!(team.record(b).unwrap().name, "squirtle");
        assert_eq!(team.generation(a), 1);
        assert_eq!(team.generation(b), 1);
    }
}
