use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use guildhall_domain::{CapabilityMatrix, DivisionId, RoleName, UserId};
use guildhall_infrastructure::InMemoryMemberDirectory;

use crate::api_router::build_router;
use crate::api_services::build_in_memory_app_state;
use crate::middleware::ACTING_MEMBER_HEADER;

struct Fixture {
    router: Router,
    directory: Arc<InMemoryMemberDirectory>,
}

impl Fixture {
    fn new() -> Self {
        let directory = Arc::new(InMemoryMemberDirectory::with_standard_catalog());
        let state = build_in_memory_app_state(
            directory.clone(),
            Arc::new(CapabilityMatrix::standard()),
        );

        Self {
            router: build_router(state),
            directory,
        }
    }

    async fn member(&self, role_name: RoleName, division_id: DivisionId) -> UserId {
        let user_id = UserId::new();
        let Some(role) = self.directory.find_role_by_name(role_name).await else {
            panic!("catalog role {role_name} should be seeded");
        };
        let inserted = self
            .directory
            .upsert_member(user_id, role.id(), [division_id], std::iter::empty())
            .await;
        assert!(inserted.is_ok());
        user_id
    }

    async fn role_id(&self, role_name: RoleName) -> String {
        self.directory
            .find_role_by_name(role_name)
            .await
            .map(|role| role.id().to_string())
            .unwrap_or_default()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let Ok(response) = self.router.clone().oneshot(request).await;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }
}

fn get(uri: &str, acting_member: UserId) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(ACTING_MEMBER_HEADER, acting_member.to_string())
        .body(Body::empty())
        .unwrap_or_default()
}

fn put_json(uri: &str, acting_member: UserId, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(ACTING_MEMBER_HEADER, acting_member.to_string())
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap_or_default()
}

#[tokio::test]
async fn missing_acting_member_is_unauthorized() {
    let fixture = Fixture::new();
    let request = Request::builder()
        .uri("/api/roles")
        .body(Body::empty())
        .unwrap_or_default();

    let (status, _) = fixture.send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn leader_assigns_co_leader_within_shared_division() {
    let fixture = Fixture::new();
    let division_id = DivisionId::new();
    let leader = fixture.member(RoleName::Leader, division_id).await;
    let member = fixture.member(RoleName::Member, division_id).await;
    let role_id = fixture.role_id(RoleName::CoLeader).await;

    let (status, body) = fixture
        .send(put_json(
            &format!("/api/members/{member}/role"),
            leader,
            &json!({ "role_id": role_id }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["new_role"], "co-leader");
    assert_eq!(body["user"]["role"]["name"], "co-leader");
    assert_eq!(
        body["message"],
        "role updated from 'member' to 'co-leader' successfully."
    );
}

#[tokio::test]
async fn out_of_scope_assignment_is_forbidden() {
    let fixture = Fixture::new();
    let leader = fixture.member(RoleName::Leader, DivisionId::new()).await;
    let member = fixture.member(RoleName::Member, DivisionId::new()).await;
    let role_id = fixture.role_id(RoleName::SeniorMember).await;

    let (status, body) = fixture
        .send(put_json(
            &format!("/api/members/{member}/role"),
            leader,
            &json!({ "role_id": role_id }),
        ))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "forbidden: you can only edit members of a division or club you belong to"
    );
}

#[tokio::test]
async fn malformed_body_is_rejected_as_json_validation_error() {
    let fixture = Fixture::new();
    let division_id = DivisionId::new();
    let president = fixture.member(RoleName::President, division_id).await;
    let member = fixture.member(RoleName::Member, division_id).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/members/{member}/role"))
        .header(ACTING_MEMBER_HEADER, president.to_string())
        .header("content-type", "application/json")
        .body(Body::from("{\"role\":"))
        .unwrap_or_default();
    let (status, body) = fixture.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.starts_with("validation error: invalid request body"));

    let (status, body) = fixture
        .send(put_json(
            &format!("/api/members/{member}/role"),
            president,
            &json!({ "role": "committee" }),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn unknown_role_id_is_not_found() {
    let fixture = Fixture::new();
    let division_id = DivisionId::new();
    let president = fixture.member(RoleName::President, division_id).await;
    let member = fixture.member(RoleName::Member, division_id).await;

    let (status, _) = fixture
        .send(put_json(
            &format!("/api/members/{member}/role"),
            president,
            &json!({ "role_id": UserId::new().to_string() }),
        ))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_member_id_is_bad_request() {
    let fixture = Fixture::new();
    let president = fixture.member(RoleName::President, DivisionId::new()).await;

    let (status, _) = fixture
        .send(get("/api/members/not-a-uuid/assignable-roles", president))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assignable_roles_and_visibility_follow_matrix() {
    let fixture = Fixture::new();
    let division_id = DivisionId::new();
    let committee = fixture.member(RoleName::Committee, division_id).await;
    let member = fixture.member(RoleName::Member, division_id).await;

    let (status, roles) = fixture
        .send(get(
            &format!("/api/members/{committee}/assignable-roles"),
            committee,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = roles
        .as_array()
        .map(|values| {
            values
                .iter()
                .filter_map(|value| value["name"].as_str())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(
        names,
        vec!["committee", "leader", "co-leader", "member", "senior-member"]
    );

    let (_, committee_view) = fixture
        .send(get(
            &format!("/api/members/{committee}/role-management"),
            committee,
        ))
        .await;
    let (_, member_view) = fixture
        .send(get(&format!("/api/members/{member}/role-management"), member))
        .await;
    assert_eq!(committee_view["can_manage_roles"], true);
    assert_eq!(member_view["can_manage_roles"], false);
}
