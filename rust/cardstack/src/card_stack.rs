//! `CardStack`: an ordered, named collection of cards addressed by index.

use cardstack_collections::{
    Anomalies, Direction, DirectionalView, Iteratee, ReverseIterable, Traversal,
    find_anomalies_by,
};
use cardstack_common::{Error, Result};

/// A named stack of cards (a deck, a hand, a discard pile).
///
/// Cards are addressed by zero-based index. Requests for several cards are
/// validated as a whole: every index must be non-negative, exist in the stack,
/// and appear once.
///
/// The cards sit behind a [`DirectionalView`]; [`CardStack::traverse`] walks
/// them from the top or from the bottom according to the view's direction.
#[derive(Debug, Clone)]
pub struct CardStack<C> {
    alias: String,
    view: DirectionalView<Vec<C>>,
}

impl<C> CardStack<C> {
    pub fn new(alias: impl Into<String>) -> CardStack<C> {
        CardStack::with_cards(alias, Vec::new())
    }

    pub fn with_cards(alias: impl Into<String>, cards: Vec<C>) -> CardStack<C> {
        CardStack {
            alias: alias.into(),
            view: DirectionalView::new(cards),
        }
    }

    /// The name used to refer to this stack in error messages.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn cards(&self) -> &[C] {
        self.view.source()
    }

    pub fn push(&mut self, card: C) {
        self.view.source_mut().push(card);
    }

    pub fn direction(&self) -> Direction {
        self.view.direction()
    }

    /// Classifies `indexes` against the cards currently in the stack.
    pub fn find_anomalies(&self, indexes: &[i64]) -> Anomalies {
        find_card_index_anomalies(self.len() as u64, indexes)
    }

    /// Checks that `indexes` can be used to address cards of this stack.
    ///
    /// See [`validate_card_indexes`] for the order in which problems are reported.
    pub fn validate_indexes(&self, indexes: &[i64]) -> Result<()> {
        validate_card_indexes(&self.alias, self.len() as u64, indexes)
    }

    /// Returns the cards at `indexes`, in request order.
    pub fn pick(&self, indexes: &[i64]) -> Result<Vec<&C>> {
        self.validate_indexes(indexes)?;
        let cards = self.cards();
        Ok(indexes
            .iter()
            .map(|&index| &cards[index as usize])
            .collect())
    }

    /// Walks the stack in its current direction.
    pub fn traverse(&self) -> Traversal<'_, C> {
        self.view.iter()
    }
}

/// Card indexes are non-negative integers.
pub fn is_valid_card_index(index: i64) -> bool {
    index >= 0
}

/// Classifies `indexes` against a stack holding `stack_size` cards.
///
/// The stack's indexes are never enumerated, so `stack_size` may be arbitrarily
/// large.
pub fn find_card_index_anomalies(stack_size: u64, indexes: &[i64]) -> Anomalies {
    find_anomalies_by(
        |index| u64::try_from(index).is_ok_and(|index| index < stack_size),
        indexes,
        is_valid_card_index,
    )
}

/// Checks `indexes` against a stack named `stack_alias` holding `stack_size`
/// cards.
///
/// Reports the first applicable problem, in this order: negative indexes
/// (all of them), an index past the end of the stack (the first one),
/// repeated indexes (all of them).
pub fn validate_card_indexes(stack_alias: &str, stack_size: u64, indexes: &[i64]) -> Result<()> {
    let anomalies = find_card_index_anomalies(stack_size, indexes);
    if anomalies.is_empty() {
        return Ok(());
    }
    log::debug!("card stack {stack_alias}: rejected indexes {anomalies:?}");

    let Anomalies {
        not_found,
        invalid,
        duplicates,
    } = anomalies;
    if !invalid.is_empty() {
        return Err(Error::invalid_card_indexes(invalid));
    }
    if let Some(&missing) = not_found.first() {
        return Err(Error::card_index_does_not_exist(missing, stack_alias));
    }
    Err(Error::duplicate_card_indexes(duplicates, stack_alias))
}

impl<C> Iteratee for CardStack<C> {
    type Item = C;

    fn iteratee(&self) -> &[C] {
        self.cards()
    }
}

impl<C> ReverseIterable for CardStack<C> {
    fn to_reverse_iterable(&mut self) {
        self.view.to_reverse_iterable();
    }

    fn to_forward_iterable(&mut self) {
        self.view.to_forward_iterable();
    }
}

impl<'a, C> IntoIterator for &'a CardStack<C> {
    type Item = &'a C;
    type IntoIter = Traversal<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

#[cfg(test)]
mod tests {
    use cardstack_common::ErrorKind;

    use super::*;

    fn hand() -> CardStack<&'static str> {
        CardStack::with_cards("hand", vec!["AS", "KD", "3C", "9H"])
    }

    #[test]
    fn test_pick_in_request_order() {
        let hand = hand();
        assert_eq!(hand.pick(&[3, 0]).unwrap(), vec![&"9H", &"AS"]);
        assert!(hand.pick(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_negative_index() {
        let err = hand().validate_indexes(&[1, -2]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidCardIndex { value: -2 }));
    }

    #[test]
    fn test_several_negative_indexes_win_over_missing() {
        let err = hand().validate_indexes(&[-1, 7, -3, -1]).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidCardIndexes { values } => assert_eq!(values, &vec![-1, -3]),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_missing_index() {
        let err = hand().validate_indexes(&[0, 4, 5]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Card with index 4 doesn't exist in card stack hand"
        );
    }

    #[test]
    fn test_duplicate_indexes() {
        let err = hand().validate_indexes(&[2, 1, 2, 1, 2]).unwrap_err();
        match err.kind() {
            ErrorKind::DuplicateCardIndexes {
                values,
                stack_alias,
            } => {
                assert_eq!(values, &vec![2, 1]);
                assert_eq!(stack_alias, "hand");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_empty_stack_rejects_everything() {
        let deck = CardStack::<u8>::new("deck");
        assert!(deck.is_empty());
        assert!(deck.find_anomalies(&[]).is_empty());
        assert!(deck.validate_indexes(&[]).is_ok());
        assert!(deck.validate_indexes(&[0]).is_err());
    }

    #[test]
    fn test_traverse_follows_direction() {
        let mut hand = hand();
        assert_eq!(hand.traverse().copied().collect::<Vec<_>>(), ["AS", "KD", "3C", "9H"]);

        hand.to_reverse_iterable();
        hand.to_reverse_iterable();
        assert_eq!(hand.direction(), Direction::Reverse);
        let mut reversed = Vec::new();
        for card in &hand {
            reversed.push(*card);
        }
        assert_eq!(reversed, ["9H", "3C", "KD", "AS"]);

        hand.to_forward_iterable();
        hand.push("5S");
        assert_eq!(hand.traverse().last(), Some(&"5S"));
        assert_eq!(hand.len(), 5);
    }

    #[test]
    fn test_validate_against_huge_stack() {
        let size = 4_000_000_000_000u64;
        let last = size as i64 - 1;
        assert!(validate_card_indexes("shoe", size, &[0, last]).is_ok());

        let err = validate_card_indexes("shoe", size, &[0, last + 1]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::CardIndexDoesNotExist { value, .. } if *value == last + 1
        ));

        let anomalies = find_card_index_anomalies(u64::MAX, &[i64::MAX, -1, i64::MAX]);
        assert_eq!(anomalies.not_found, vec![-1]);
        assert_eq!(anomalies.invalid, vec![-1]);
        assert_eq!(anomalies.duplicates, vec![i64::MAX]);
    }

    #[test]
    fn test_stack_and_free_validation_agree() {
        let hand = hand();
        for request in [&[0, 3][..], &[4], &[-1, 2], &[1, 1], &[]] {
            assert_eq!(
                hand.validate_indexes(request).map_err(|e| e.to_string()),
                validate_card_indexes("hand", 4, request).map_err(|e| e.to_string())
            );
        }
    }

    #[test]
    fn test_stack_as_iteratee() {
        let hand = hand();
        let mut view = DirectionalView::new(&hand);
        view.to_reverse_iterable();
        assert_eq!(view.iter().next(), Some(&"9H"));
        // The stack's own direction is untouched.
        assert_eq!(hand.direction(), Direction::Forward);
    }
}
