use super::*;
use ApplicationStatus as S;

fn statuses(actions: &[StatusAction]) -> Vec<S> {
    actions.iter().map(|a| a.status).collect()
}

#[test]
fn pending_offers_review_shortlist_and_decision() {
    assert_eq!(
        statuses(&next_actions(S::Pending)),
        vec![S::Reviewed, S::Shortlisted, S::Accepted, S::Rejected]
    );
}

#[test]
fn reviewed_offers_shortlist_and_decision() {
    assert_eq!(
        statuses(&next_actions(S::Reviewed)),
        vec![S::Shortlisted, S::Accepted, S::Rejected]
    );
}

#[test]
fn shortlisted_offers_interview_and_decision() {
    assert_eq!(
        statuses(&next_actions(S::Shortlisted)),
        vec![S::Interview, S::Accepted, S::Rejected]
    );
}

#[test]
fn interview_offers_only_decision() {
    assert_eq!(
        statuses(&next_actions(S::Interview)),
        vec![S::Accepted, S::Rejected]
    );
}

#[test]
fn terminal_statuses_offer_nothing() {
    for status in [S::Accepted, S::Offered, S::Rejected, S::Withdrawn] {
        assert!(
            next_actions(status).is_empty(),
            "{status:?} should have no workflow buttons"
        );
    }
}

#[test]
fn accept_and_reject_always_travel_together() {
    for status in [S::Pending, S::Reviewed, S::Shortlisted, S::Interview] {
        let offered = statuses(&next_actions(status));
        assert!(offered.contains(&S::Accepted));
        assert!(offered.contains(&S::Rejected));
    }
}
