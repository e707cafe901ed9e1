use super::*;

fn conv(partner_id: i64, name: &str, unread: i64) -> Conversation {
    Conversation {
        partner_id,
        partner_name: name.to_owned(),
        last_message: None,
        last_message_time: None,
        unread_count: unread,
    }
}

#[test]
fn empty_term_keeps_all_conversations() {
    let list = vec![conv(1, "Asha", 0), conv(2, "Ravi", 2)];
    assert_eq!(filter_conversations(&list, "").len(), 2);
    assert_eq!(filter_conversations(&list, "   ").len(), 2);
}

#[test]
fn filter_matches_case_insensitive_substring() {
    let list = vec![conv(1, "Asha Verma", 0), conv(2, "Ravi", 0)];
    let hits = filter_conversations(&list, "verma");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].partner_id, 1);
    assert!(filter_conversations(&list, "VERMA").len() == 1);
    assert!(filter_conversations(&list, "zzz").is_empty());
}

#[test]
fn clear_unread_zeroes_only_target() {
    let mut list = vec![conv(1, "Asha", 3), conv(2, "Ravi", 5)];
    clear_unread(&mut list, 1);
    assert_eq!(list[0].unread_count, 0);
    assert_eq!(list[1].unread_count, 5);
    // Unknown partner is a no-op.
    clear_unread(&mut list, 99);
    assert_eq!(list[1].unread_count, 5);
}
