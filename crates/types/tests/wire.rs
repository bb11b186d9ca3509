//! Wire-format contract: stable wire names, omission of unset fields,
//! and tolerant deserialization of service responses.

use std::collections::BTreeMap;

use courier_types::*;
use serde_json::json;

#[test]
fn unset_fields_are_omitted_from_serialized_output() {
    let resp = EmailChannelResponse::new()
        .with_application_id("app-1")
        .with_enabled(true);
    let value = serde_json::to_value(&resp).unwrap();
    assert_eq!(value, json!({"ApplicationId": "app-1", "Enabled": true}));
}

#[test]
fn an_empty_shape_serializes_as_an_empty_object() {
    let value = serde_json::to_value(Schedule::new()).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn set_but_empty_containers_are_not_treated_as_unset() {
    let cfg = AddressConfiguration::new().with_context(BTreeMap::new());
    let value = serde_json::to_value(&cfg).unwrap();
    assert_eq!(value, json!({"Context": {}}));
}

#[test]
fn maps_and_nested_shapes_serialize_under_their_wire_names() {
    let mut push = PushMessage::new()
        .with_action(Action::OpenApp)
        .with_time_to_live(3600);
    push.add_data_entry("origin", "inbox").unwrap();
    push.add_substitutions_entry("name", vec!["Ada".to_string()])
        .unwrap();

    let req = MessageRequest::new()
        .with_message_configuration(
            DirectMessageConfiguration::new().with_push_message(push),
        )
        .with_trace_id("t-1");

    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        json!({
            "MessageConfiguration": {
                "PushMessage": {
                    "Action": "OPEN_APP",
                    "Data": {"origin": "inbox"},
                    "Substitutions": {"name": ["Ada"]},
                    "TimeToLive": 3600
                }
            },
            "TraceId": "t-1"
        }),
    );
}

#[test]
fn missing_and_unknown_keys_deserialize_tolerantly() {
    let resp: CampaignResponse = serde_json::from_value(json!({
        "Id": "c-1",
        "State": {"CampaignStatus": "EXECUTING"},
        "SomeFutureField": {"anything": 1}
    }))
    .unwrap();
    assert_eq!(resp.id(), Some("c-1"));
    assert_eq!(
        resp.state().and_then(CampaignState::campaign_status),
        Some("EXECUTING"),
    );
    assert_eq!(resp.name(), None);
    assert_eq!(resp.additional_treatments(), None);
}

#[test]
fn enum_backed_fields_round_trip_values_outside_the_known_set() {
    let payload = json!({"SegmentType": "FEDERATED"});
    let seg: SegmentResponse = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(seg.segment_type(), Some("FEDERATED"));
    assert_eq!(serde_json::to_value(&seg).unwrap(), payload);
}

#[test]
fn serialization_round_trip_preserves_every_set_field() {
    let mut endpoint = EndpointRequest::new()
        .with_address("device-token-1")
        .with_channel_type(ChannelType::Push)
        .with_effective_date("2024-03-01T12:30:00Z")
        .with_demographic(
            EndpointDemographic::new()
                .with_platform("android")
                .with_timezone("Europe/Amsterdam"),
        )
        .with_user(EndpointUser::new().with_user_id("u-1"));
    endpoint
        .add_attributes_entry("interests", vec!["science".to_string()])
        .unwrap();

    let value = serde_json::to_value(&endpoint).unwrap();
    let back: EndpointRequest = serde_json::from_value(value).unwrap();
    assert_eq!(back, endpoint);
}

#[test]
fn kpi_rows_nest_through_serialization() {
    let resp = CampaignDateRangeKpiResponse::new()
        .with_campaign_id("c-1")
        .with_kpi_name("unique-deliveries")
        .with_kpi_result(BaseKpiResult::new().with_rows([ResultRow::new().with_values([
            ResultRowValue::new()
                .with_key("UniqueDeliveries")
                .with_value_type("Double")
                .with_value("42.0"),
        ])]));

    let value = serde_json::to_value(&resp).unwrap();
    assert_eq!(
        value,
        json!({
            "CampaignId": "c-1",
            "KpiName": "unique-deliveries",
            "KpiResult": {
                "Rows": [
                    {
                        "Values": [
                            {"Key": "UniqueDeliveries", "Type": "Double", "Value": "42.0"}
                        ]
                    }
                ]
            }
        }),
    );
}

#[test]
fn timestamp_fields_store_what_the_helpers_produce() {
    use time::macros::datetime;

    let stored = courier_model::timestamp::format(datetime!(2024-03-01 12:30:00 UTC)).unwrap();
    let session = Session::new().with_start_timestamp(stored.clone());
    assert_eq!(session.start_timestamp(), Some(stored.as_str()));
    assert_eq!(
        courier_model::timestamp::parse(session.start_timestamp().unwrap()).unwrap(),
        datetime!(2024-03-01 12:30:00 UTC),
    );
}
