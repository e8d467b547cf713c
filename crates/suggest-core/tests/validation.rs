use suggest_core::prelude::*;

#[test]
fn empty_query_is_missing() {
    assert_eq!(
        SuggestionRequest::new("").validate(),
        Err(ValidationError::MissingQuery)
    );
    assert_eq!(
        SuggestionRequest::default().validate(),
        Err(ValidationError::MissingQuery)
    );
}

#[test]
fn blank_query_is_missing() {
    assert_eq!(
        validate(&SuggestionRequest::new("   \t")),
        Err(ValidationError::MissingQuery)
    );
}

#[test]
fn latitude_without_longitude_is_inconsistent() {
    let req = SuggestionRequest::new("Lon").with_latitude(43.7);
    assert_eq!(req.validate(), Err(ValidationError::InconsistentCoordinates));
}

#[test]
fn longitude_with_blank_latitude_is_inconsistent() {
    let req = SuggestionRequest::new("Lon")
        .with_latitude("  ")
        .with_longitude("-79.4");
    assert_eq!(req.validate(), Err(ValidationError::InconsistentCoordinates));
}

#[test]
fn both_blank_coordinates_count_as_absent() {
    let req = SuggestionRequest::new("Lon").with_coordinates("", "");
    assert!(req.validate().is_ok());
    assert_eq!(req.to_query().unwrap().origin(), None);
}

#[test]
fn lone_blank_latitude_counts_as_absent() {
    let req = SuggestionRequest::new("Lon").with_latitude("");
    assert!(req.validate().is_ok());
    assert_eq!(req.to_query().unwrap().origin(), None);
}

#[test]
fn missing_query_wins_over_coordinates() {
    let req = SuggestionRequest::new("").with_latitude(1.0);
    assert_eq!(req.validate(), Err(ValidationError::MissingQuery));
}

#[test]
fn messages_match_the_endpoint() {
    assert_eq!(ValidationError::MissingQuery.to_string(), "query is mandatory!");
    assert_eq!(
        ValidationError::InconsistentCoordinates.to_string(),
        "lat or long missing"
    );
}

#[test]
fn to_query_parses_string_and_number_coordinates() {
    let query = SuggestionRequest::new("Lon")
        .with_coordinates("43.70011", -79.4163)
        .with_limit(3)
        .to_query()
        .unwrap();
    assert_eq!(query.origin(), Some(GeoPoint::new(43.70011, -79.4163)));
    assert_eq!(query.limit(), 3);
}

#[test]
fn to_query_rejects_garbage_coordinates() {
    let err = SuggestionRequest::new("Lon")
        .with_coordinates("north", "-79.4")
        .to_query()
        .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidCoordinate(_)));

    let err = SuggestionRequest::new("Lon")
        .with_coordinates(91.0, 0.0)
        .to_query()
        .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidCoordinate(_)));
}

#[test]
fn to_query_normalizes_and_trims() {
    let query = SuggestionRequest::new("  Münich ").to_query().unwrap();
    assert_eq!(query.text(), "Munich");
}

#[test]
fn empty_query_never_becomes_a_query() {
    assert_eq!(Query::new(""), Err(ValidationError::MissingQuery));
    assert_eq!(Query::new(" \n "), Err(ValidationError::MissingQuery));
    assert!(SuggestionRequest::new("").to_query().is_err());
}

#[test]
fn limit_defaults_to_zero_and_negative_clamps() {
    assert_eq!(SuggestionRequest::new("a").to_query().unwrap().limit(), 0);
    assert_eq!(
        SuggestionRequest::new("a").with_limit(-5).to_query().unwrap().limit(),
        0
    );
}

#[test]
fn request_deserializes_from_query_params() {
    let req: SuggestionRequest =
        serde_json::from_str(r#"{"q":"Mont","latitude":"45.5","longitude":"-73.5","limit":2}"#)
            .unwrap();
    assert_eq!(req.q.as_deref(), Some("Mont"));
    assert_eq!(req.latitude, Some(Coordinate::Text("45.5".into())));
    assert_eq!(req.limit, Some(2));

    let empty: SuggestionRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, SuggestionRequest::default());
}
