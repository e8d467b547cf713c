use suggest_cli::search::{exit_status, render, EXIT_FAILURE, EXIT_INVALID_INPUT};
use suggest_core::{Catalog, City, SuggestionRequest, ValidationError};

fn catalog() -> Catalog {
    Catalog::new(vec![
        City::new("Paris", "Paris", 2_000_000, 48.8566, 2.3522),
        City::new("Parma", "Parma", 1_000_000, 44.8, 10.3),
    ])
    .unwrap()
}

#[test]
fn empty_query_is_rejected_with_status_two() {
    let err = render(&catalog(), &SuggestionRequest::new("").with_limit(5), false).unwrap_err();

    assert_eq!(err.to_string(), "query is mandatory!");
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::MissingQuery)
    );
    assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);
}

#[test]
fn lone_latitude_is_rejected_with_status_two() {
    let req = SuggestionRequest::new("Par").with_latitude("48.8").with_limit(5);
    let err = render(&catalog(), &req, true).unwrap_err();

    assert_eq!(err.to_string(), "lat or long missing");
    assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);
}

#[test]
fn other_errors_map_to_status_one() {
    assert_eq!(exit_status(&anyhow::anyhow!("disk on fire")), EXIT_FAILURE);
}

#[test]
fn plain_output_lists_ranked_lines() {
    let out = render(&catalog(), &SuggestionRequest::new("Par").with_limit(5), false).unwrap();
    assert_eq!(
        out,
        "0.6  Paris (48.8566, 2.3522)\n0.3  Parma (44.8, 10.3)\n"
    );
}

#[test]
fn plain_output_reports_no_matches() {
    let out = render(&catalog(), &SuggestionRequest::new("Zür").with_limit(5), false).unwrap();
    assert_eq!(out, "No cities found matching: Zur\n");
}

#[test]
fn json_output_is_an_envelope() {
    let out = render(&catalog(), &SuggestionRequest::new("Pari").with_limit(5), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["suggestions"][0]["name"], "Paris");
    assert_eq!(value["suggestions"][0]["score"], 0.7);
}
