//! Token encoding for ledger snapshots
//!
//! A token is JSON wrapped in URL-safe unpadded base64: reversible, text-safe
//! for URL parameters and durable key-value storage, and a pure function of
//! the snapshot's content. The encoding is an implementation detail; the only
//! contract is the roundtrip law and graceful degradation on bad input.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use tracing::warn;

use domain_ledger::LedgerState;

/// Encodes a snapshot into an opaque shareable token.
///
/// Equal states produce equal tokens; nothing else is promised about the
/// token's shape. Byte-identical re-encoding after a roundtrip is not part
/// of the contract.
pub fn serialize(state: &LedgerState) -> String {
    let json = serde_json::to_vec(state)
        .expect("ledger snapshots contain no unserializable values");
    URL_SAFE_NO_PAD.encode(json)
}

/// Decodes a token back into a snapshot.
///
/// Never fails outward: malformed base64, truncated input, invalid JSON, a
/// JSON shape that is not a ledger snapshot, or a shape-valid snapshot that
/// violates the data model (checked via [`LedgerState::validate`]) all
/// decode to the canonical empty state. The failure is logged, not raised.
pub fn deserialize(token: &str) -> LedgerState {
    let decoded = URL_SAFE_NO_PAD
        .decode(token.trim())
        .ok()
        .and_then(|bytes| serde_json::from_slice::<LedgerState>(&bytes).ok());

    match decoded {
        Some(state) => match state.validate() {
            Ok(()) => state,
            Err(error) => {
                warn!(%error, "ledger token violates data-model invariants, using empty state");
                LedgerState::default()
            }
        },
        None => {
            warn!(token_len = token.len(), "undecodable ledger token, using empty state");
            LedgerState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain_ledger::{ExpenseDraft, LedgerStore};
    use rust_decimal_macros::dec;

    fn sample_state() -> LedgerState {
        let mut store = LedgerStore::new();
        let anna = store.add_person("Anna").unwrap();
        let ben = store.add_person("Ben").unwrap();
        store
            .add_expense(
                ExpenseDraft::new("Dinner", dec!(59.90))
                    .with_category("Food")
                    .with_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
                    .with_payer(anna.id)
                    .with_split([anna.id, ben.id]),
            )
            .unwrap();
        store.snapshot()
    }

    #[test]
    fn roundtrip_preserves_content_and_order() {
        let state = sample_state();
        assert_eq!(deserialize(&serialize(&state)), state);
    }

    #[test]
    fn roundtrip_preserves_the_empty_state() {
        let empty = LedgerState::default();
        assert_eq!(deserialize(&serialize(&empty)), empty);
    }

    #[test]
    fn tokens_are_url_safe() {
        let token = serialize(&sample_state());
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn equal_states_produce_equal_tokens() {
        let state = sample_state();
        assert_eq!(serialize(&state), serialize(&state.clone()));
    }

    #[test]
    fn garbage_tokens_decode_to_empty() {
        assert_eq!(deserialize(""), LedgerState::default());
        assert_eq!(deserialize("%%%not base64%%%"), LedgerState::default());
        assert_eq!(deserialize("aGVsbG8"), LedgerState::default()); // "hello"
    }

    #[test]
    fn truncated_tokens_decode_to_empty() {
        let token = serialize(&sample_state());
        let truncated = &token[..token.len() / 2];
        assert_eq!(deserialize(truncated), LedgerState::default());
    }

    #[test]
    fn valid_base64_of_wrong_shape_decodes_to_empty() {
        let token = URL_SAFE_NO_PAD.encode(br#"{"people": 7}"#);
        assert_eq!(deserialize(&token), LedgerState::default());
    }

    #[test]
    fn token_with_an_empty_split_decodes_to_empty() {
        let mut state = sample_state();
        state.expenses[0].split_between.clear();
        assert_eq!(deserialize(&serialize(&state)), LedgerState::default());
    }

    #[test]
    fn token_with_a_dangling_person_reference_decodes_to_empty() {
        let mut state = sample_state();
        state.people.pop();
        assert_eq!(deserialize(&serialize(&state)), LedgerState::default());
    }

    #[test]
    fn token_with_duplicate_names_decodes_to_empty() {
        let mut state = sample_state();
        state.people[1].name = state.people[0].name.to_uppercase();
        assert_eq!(deserialize(&serialize(&state)), LedgerState::default());
    }
}
