use claim::assert_err;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{fixture, EmptyBodyMatcher, TestApp, SUBSCRIBER_ID};
use novu_client::domain::{
    ChannelType, SubscriberPayload, SubscriberPreferencesResponse, SubscriberResponse,
    UpdateSubscriberPreferencesOptions,
};
use novu_client::NovuError;

#[tokio::test]
async fn identify_posts_the_payload_with_the_subscriber_id() {
    let test_app = TestApp::spawn_app().await;
    let payload: SubscriberPayload = fixture("identify_subscriber.json");
    let expected_response: SubscriberResponse = fixture("subscriber_response.json");

    Mock::given(path("/v1/subscribers"))
        .and(method("POST"))
        .and(header("Authorization", test_app.authorization().as_str()))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(&expected_response))
        .expect(1)
        .mount(&test_app.novu_server)
        .await;

    let response = test_app
        .client
        .subscribers()
        .identify(SUBSCRIBER_ID, &payload)
        .await
        .expect("Identify request failed.");

    assert_eq!(response, expected_response);
}

#[tokio::test]
async fn identify_embeds_the_subscriber_id_even_if_payload_lacks_it() {
    let test_app = TestApp::spawn_app().await;
    let payload = SubscriberPayload {
        email: Some(String::from("john.doe@example.com")),
        ..Default::default()
    };

    Mock::given(path("/v1/subscribers"))
        .and(method("POST"))
        .and(body_json(serde_json::json!({
            "subscriberId": SUBSCRIBER_ID,
            "email": "john.doe@example.com"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(fixture::<SubscriberResponse>("subscriber_response.json")),
        )
        .expect(1)
        .mount(&test_app.novu_server)
        .await;

    let response = test_app
        .client
        .subscribers()
        .identify(SUBSCRIBER_ID, &payload)
        .await
        .expect("Identify request failed.");

    assert_eq!(response.data.subscriber_id.as_deref(), Some(SUBSCRIBER_ID));
}

#[tokio::test]
async fn update_puts_the_payload_to_the_subscriber_path() {
    let test_app = TestApp::spawn_app().await;
    let payload: SubscriberPayload = fixture("update_subscriber.json");
    let expected_response: SubscriberResponse = fixture("subscriber_response.json");

    Mock::given(path(format!("/v1/subscribers/{}", SUBSCRIBER_ID)))
        .and(method("PUT"))
        .and(header("Authorization", test_app.authorization().as_str()))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(&expected_response))
        .expect(1)
        .mount(&test_app.novu_server)
        .await;

    let response = test_app
        .client
        .subscribers()
        .update(SUBSCRIBER_ID, &payload)
        .await
        .expect("Update request failed.");

    assert_eq!(response, expected_response);
}

#[tokio::test]
async fn delete_sends_no_body_and_returns_the_last_known_state() {
    let test_app = TestApp::spawn_app().await;
    let expected_response: SubscriberResponse = fixture("subscriber_response.json");

    Mock::given(path(format!("/v1/subscribers/{}", SUBSCRIBER_ID)))
        .and(method("DELETE"))
        .and(header("Authorization", test_app.authorization().as_str()))
        .and(EmptyBodyMatcher)
        .respond_with(ResponseTemplate::new(200).set_body_json(&expected_response))
        .expect(1)
        .mount(&test_app.novu_server)
        .await;

    let response = test_app
        .client
        .subscribers()
        .delete(SUBSCRIBER_ID)
        .await
        .expect("Delete request failed.");

    assert_eq!(response, expected_response);
}

#[tokio::test]
async fn delete_accepts_an_acknowledgement_body() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(path(format!("/v1/subscribers/{}", SUBSCRIBER_ID)))
        .and(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "acknowledged": true, "status": "deleted" }
        })))
        .expect(1)
        .mount(&test_app.novu_server)
        .await;

    let response = test_app
        .client
        .subscribers()
        .delete(SUBSCRIBER_ID)
        .await
        .expect("Delete request failed.");

    assert_eq!(response.data.acknowledged, Some(true));
    assert_eq!(response.data.status.as_deref(), Some("deleted"));
    assert_eq!(response.data.subscriber_id, None);
}

#[tokio::test]
async fn get_returns_the_fixture_subscriber() {
    let test_app = TestApp::spawn_app().await;
    let expected_response: SubscriberResponse = fixture("subscriber_response.json");

    Mock::given(path(format!("/v1/subscribers/{}", SUBSCRIBER_ID)))
        .and(method("GET"))
        .and(header("Authorization", test_app.authorization().as_str()))
        .and(EmptyBodyMatcher)
        .respond_with(ResponseTemplate::new(200).set_body_json(&expected_response))
        .expect(1)
        .mount(&test_app.novu_server)
        .await;

    let response = test_app
        .client
        .subscribers()
        .get(SUBSCRIBER_ID)
        .await
        .expect("Get request failed.");

    assert_eq!(response, expected_response);
}

#[tokio::test]
async fn get_preferences_sends_get_with_empty_body() {
    let test_app = TestApp::spawn_app().await;
    let expected_response: SubscriberPreferencesResponse =
        fixture("subscriber_preferences_response.json");

    Mock::given(path(format!("/v1/subscribers/{}/preferences", SUBSCRIBER_ID)))
        .and(method("GET"))
        .and(header("Authorization", test_app.authorization().as_str()))
        .and(EmptyBodyMatcher)
        .respond_with(ResponseTemplate::new(200).set_body_json(&expected_response))
        .expect(1)
        .mount(&test_app.novu_server)
        .await;

    let response = test_app
        .client
        .subscribers()
        .get_preferences(SUBSCRIBER_ID)
        .await
        .expect("Get preferences request failed.");

    assert_eq!(response, expected_response);
}

#[tokio::test]
async fn update_preferences_patches_the_topic_with_the_options() {
    let test_app = TestApp::spawn_app().await;
    let topic_id = "topicId";
    let expected_response: SubscriberPreferencesResponse =
        fixture("subscriber_preferences_response.json");
    let options = UpdateSubscriberPreferencesOptions::new()
        .enabled(true)
        .channel(ChannelType::Email, true);

    Mock::given(path(format!(
        "/v1/subscribers/{}/preferences/{}",
        SUBSCRIBER_ID, topic_id
    )))
    .and(method("PATCH"))
    .and(header("Authorization", test_app.authorization().as_str()))
    .and(body_json(serde_json::json!({
        "enabled": true,
        "channel": [{ "type": "email", "enabled": true }]
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(&expected_response))
    .expect(1)
    .mount(&test_app.novu_server)
    .await;

    let response = test_app
        .client
        .subscribers()
        .update_preferences(SUBSCRIBER_ID, topic_id, &options)
        .await
        .expect("Update preferences request failed.");

    assert_eq!(response, expected_response);
    assert_eq!(
        response
            .for_template(topic_id)
            .and_then(|preference| preference.preference.channels.get(ChannelType::Email)),
        Some(true)
    );
}

#[tokio::test]
async fn subscriber_ids_are_encoded_as_a_single_path_segment() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(path("/v1/subscribers/team%2Fjohn"))
        .and(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixture::<SubscriberResponse>("subscriber_response.json")),
        )
        .expect(1)
        .mount(&test_app.novu_server)
        .await;

    let response = test_app.client.subscribers().get("team/john").await;

    assert!(response.is_ok());
}

#[tokio::test]
async fn not_found_is_reported_with_status_and_message() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "statusCode": 404,
            "message": "Subscriber not found",
            "error": "Not Found"
        })))
        .expect(1)
        .mount(&test_app.novu_server)
        .await;

    let error = test_app
        .client
        .subscribers()
        .get(SUBSCRIBER_ID)
        .await
        .unwrap_err();

    assert!(error.is_not_found());
    match error {
        NovuError::Api { message, .. } => assert_eq!(message, "Subscriber not found"),
        other => panic!("Expected an api error, got {:?}", other),
    }
}

#[tokio::test]
async fn every_operation_fails_if_server_returns_500() {
    let test_app = TestApp::spawn_app().await;
    let payload: SubscriberPayload = fixture("identify_subscriber.json");
    let options = UpdateSubscriberPreferencesOptions::new().enabled(false);
    let subscribers = test_app.client.subscribers();

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(6)
        .mount(&test_app.novu_server)
        .await;

    assert_err!(subscribers.identify(SUBSCRIBER_ID, &payload).await);
    assert_err!(subscribers.update(SUBSCRIBER_ID, &payload).await);
    assert_err!(subscribers.delete(SUBSCRIBER_ID).await);
    assert_err!(subscribers.get(SUBSCRIBER_ID).await);
    assert_err!(subscribers.get_preferences(SUBSCRIBER_ID).await);
    assert_err!(
        subscribers
            .update_preferences(SUBSCRIBER_ID, "topicId", &options)
            .await
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&test_app.novu_server)
        .await;

    let result = test_app.client.subscribers().get_preferences(SUBSCRIBER_ID).await;

    assert!(matches!(result, Err(NovuError::Decode(_))));
}
