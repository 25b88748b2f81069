use serde_json::json;
use trackform_cloud::{
    ActionType, AttributeMap, CloudError, Resource, ResourceRecord, apply_action, plan_resource,
};
use trackform_tracker::{ProjectResource, RESOURCE_TYPE, TrackerClient, TrackerConfig};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resource(server: &MockServer) -> ProjectResource<TrackerClient> {
    let client = TrackerClient::new(TrackerConfig::new("secret", server.uri())).unwrap();
    ProjectResource::new(client)
}

fn demo_body(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "kind": "project",
        "name": name,
        "iteration_length": 2,
        "point_scale": "0,1,2,3",
        "week_start_day": "Monday",
        "velocity_averaged_over": 3,
        "enable_tasks": true,
        "account_id": 100,
        "project_type": "private",
    })
}

#[tokio::test]
async fn test_create_then_read_fills_point_scale() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(header("X-TrackerToken", "secret"))
        .and(body_partial_json(json!({"name": "Demo", "iteration_length": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_body(42, "Demo")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_body(42, "Demo")))
        .expect(1)
        .mount(&server)
        .await;

    let projects = resource(&server);
    let desired = AttributeMap::new().with("name", "Demo").with("iteration_length", 2);
    projects.schema().validate(&desired).unwrap();
    let config = projects.config_from_attributes(&desired).unwrap();

    let mut record = ResourceRecord::new(RESOURCE_TYPE);
    projects.create(&config, &mut record).await.unwrap();
    assert_eq!(record.id().unwrap(), "42");

    projects.read(&mut record).await.unwrap();
    assert_eq!(record.id().unwrap(), "42");
    assert_eq!(
        record.attributes.get_string("point_scale").unwrap(),
        "0,1,2,3"
    );
    assert_eq!(record.attributes.get_int("velocity_averaged_over").unwrap(), 3);
    assert_eq!(record.attributes.get_int("account_id").unwrap(), 100);
}

#[tokio::test]
async fn test_exists_with_zero_id_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 0})))
        .mount(&server)
        .await;

    let record = ResourceRecord::new(RESOURCE_TYPE).with_id("7");
    assert!(!resource(&server).exists(&record).await.unwrap());
}

#[tokio::test]
async fn test_exists_surfaces_not_found_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "unfound_resource",
            "kind": "error",
            "error": "The object you tried to access could not be found.",
        })))
        .mount(&server)
        .await;

    let record = ResourceRecord::new(RESOURCE_TYPE).with_id("7");
    let err = resource(&server).exists(&record).await.unwrap_err();
    assert!(matches!(err, CloudError::RemoteCall { .. }));
    assert!(err.to_string().contains("unfound_resource"));
}

#[tokio::test]
async fn test_malformed_identity_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let projects = resource(&server);
    let mut record = ResourceRecord::new(RESOURCE_TYPE).with_id("abc");

    let err = projects.read(&mut record).await.unwrap_err();
    assert!(err.is_invalid_identifier());
    assert!(!err.is_retryable());
    assert!(projects.exists(&record).await.unwrap_err().is_invalid_identifier());
    assert!(projects.delete(&mut record).await.unwrap_err().is_invalid_identifier());
}

#[tokio::test]
async fn test_import_then_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_body(42, "Imported")))
        .expect(1)
        .mount(&server)
        .await;

    let projects = resource(&server);
    let mut record = projects.import("42").unwrap();
    projects.read(&mut record).await.unwrap();

    assert_eq!(record.attributes.get_string("name").unwrap(), "Imported");
    assert!(!record.attributes.contains("status"));
}

#[tokio::test]
async fn test_plan_and_apply_rename() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/projects/42"))
        .and(body_partial_json(json!({
            "name": "Renamed",
            "description": "Team board",
            "public": true,
            "point_scale": "0,1,2,3",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_body(42, "Renamed")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/projects/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let projects = resource(&server);
    let mut record = ResourceRecord::new(RESOURCE_TYPE)
        .with_id("42")
        .with_attribute("name", "Demo")
        .with_attribute("description", "Team board")
        .with_attribute("public", true)
        .with_attribute("point_scale", "0,1,2,3");

    let desired = AttributeMap::new()
        .with("name", "Renamed")
        .with("description", "Team board")
        .with("public", true);
    let action = plan_resource("demo", &projects.schema(), Some(&desired), &record);
    assert_eq!(action.action_type, ActionType::Update);
    assert_eq!(action.changes.len(), 1);
    assert_eq!(action.changes[0].name, "name");

    apply_action(&projects, &action, Some(&desired), &mut record)
        .await
        .unwrap();
    assert_eq!(record.attributes.get_string("name").unwrap(), "Renamed");
    assert_eq!(
        record.attributes.get_string("point_scale").unwrap(),
        "0,1,2,3"
    );

    let action = plan_resource("demo", &projects.schema(), None, &record);
    assert_eq!(action.action_type, ActionType::Delete);
    apply_action(&projects, &action, None, &mut record)
        .await
        .unwrap();
    assert!(!record.is_tracked());
}

#[tokio::test]
async fn test_apply_rejects_ill_typed_input_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let projects = resource(&server);
    let mut record = ResourceRecord::new(RESOURCE_TYPE);
    let desired = AttributeMap::new().with("name", "Demo").with("iteration_length", "two");

    let action = plan_resource("demo", &projects.schema(), Some(&desired), &record);
    assert_eq!(action.action_type, ActionType::Create);
    let err = apply_action(&projects, &action, Some(&desired), &mut record)
        .await
        .unwrap_err();
    assert!(matches!(err, CloudError::Schema(_)));
    assert!(!record.is_tracked());
}
