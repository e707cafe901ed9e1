use super::*;

#[test]
fn search_href_without_filters_is_bare() {
    assert_eq!(search_href("", "", None), "/jobs");
    assert_eq!(search_href("   ", "  ", None), "/jobs");
}

#[test]
fn search_href_with_all_filters() {
    assert_eq!(
        search_href(" rust ", "Pune", Some(JobType::Remote)),
        "/jobs?keyword=rust&location=Pune&jobType=REMOTE"
    );
}

#[test]
fn search_href_with_partial_filters() {
    assert_eq!(search_href("rust", "", None), "/jobs?keyword=rust");
    assert_eq!(search_href("", "Delhi", None), "/jobs?location=Delhi");
    assert_eq!(
        search_href("", "", Some(JobType::Contract)),
        "/jobs?jobType=CONTRACT"
    );
}

#[test]
fn set_favorite_in_flips_only_target_job() {
    let raw = r#"{
        "id": 1, "title": "T", "description": "D", "companyName": "C",
        "location": "L", "jobType": "REMOTE", "status": "ACTIVE",
        "createdAt": "2025-01-01T00:00:00"
    }"#;
    let mut first: Job = serde_json::from_str(raw).unwrap();
    first.is_favorite = Some(false);
    let mut second = first.clone();
    second.id = 2;

    let mut jobs = vec![first, second];
    set_favorite_in(&mut jobs, 2, true);
    assert_eq!(jobs[0].is_favorite, Some(false));
    assert_eq!(jobs[1].is_favorite, Some(true));

    // Unknown id is a no-op.
    set_favorite_in(&mut jobs, 99, true);
    assert_eq!(jobs[0].is_favorite, Some(false));
}

#[test]
fn job_type_parse_round_trips() {
    assert_eq!(JobType::parse("FULL_TIME"), Some(JobType::FullTime));
    assert_eq!(JobType::parse(""), None);
    assert_eq!(JobType::parse("full_time"), None);
}
