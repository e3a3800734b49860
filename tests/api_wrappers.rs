mod common;

use codehub_client::api::types::{
    AddSshKeyRequest, ChangePasswordRequest, CreateRepoRequest, LoginRequest, RegisterRequest,
    UpdateProfileRequest,
};
use codehub_client::api::{Api, ApiClient, ApiError, REQUEST_ID_HEADER};
use common::{api_config, api_for, only_request, MockBackend, MockResponse};
use serde_json::json;

#[tokio::test]
async fn star_posts_once_with_empty_body() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend);

    let envelope = api.repo.star("octo", "demo").await.unwrap();
    assert!(envelope.is_success());

    let req = only_request(&backend).await;
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/repo/octo/demo/star");
    assert!(req.body.is_empty());
    assert!(req.query.is_none());
}

#[tokio::test]
async fn unstar_uses_delete_on_same_path() {
    let backend = MockBackend::start().await;
    api_for(&backend).repo.unstar("octo", "demo").await.unwrap();

    let req = only_request(&backend).await;
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/api/repo/octo/demo/star");
}

#[tokio::test]
async fn login_posts_json_credentials() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::ok(json!({
            "username": "octo",
            "display_name": "Octo Cat"
        })))
        .await;
    let api = api_for(&backend);

    let envelope = api
        .auth
        .login(&LoginRequest {
            username: "octo".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(envelope.data().unwrap().display_name, "Octo Cat");

    let req = only_request(&backend).await;
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/auth/login");
    assert_eq!(req.json(), json!({ "username": "octo", "password": "hunter2" }));
    assert!(req
        .header("content-type")
        .is_some_and(|ct| ct.starts_with("application/json")));
}

#[tokio::test]
async fn tree_keeps_file_path_segments() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::ok(json!([]))).await;

    api_for(&backend)
        .repo
        .tree("octo", "demo", "main", "src/bin/main.rs")
        .await
        .unwrap();

    let req = only_request(&backend).await;
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/repo/octo/demo/tree/main/src/bin/main.rs");
}

#[tokio::test]
async fn path_parameters_are_encoded() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::ok(json!({ "username": "a b" })))
        .await;

    api_for(&backend).user.profile("a b").await.unwrap();

    let req = only_request(&backend).await;
    assert_eq!(req.path, "/api/user/a%20b");
}

#[tokio::test]
async fn explore_sends_paging_query() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::ok(json!({ "items": [], "total": 0, "page": 2, "size": 10 })))
        .await;

    let page = api_for(&backend).explore.repos(2, 10).await.unwrap();
    assert_eq!(page.data().unwrap().page, 2);

    let req = only_request(&backend).await;
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/explore/repos");
    assert_eq!(req.query.as_deref(), Some("page=2&size=10"));
}

#[tokio::test]
async fn ssh_key_templates() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::ok(json!({ "id": 42, "title": "laptop" })))
        .await;
    let api = api_for(&backend);

    let key = api
        .user
        .add_ssh_key(&AddSshKeyRequest {
            title: "laptop".to_string(),
            key: "ssh-ed25519 AAAA".to_string(),
        })
        .await
        .unwrap();
    let id = key.data().unwrap().id;
    api.user.delete_ssh_key(id).await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(
        (requests[0].method.as_str(), requests[0].path.as_str()),
        ("POST", "/api/user/keys")
    );
    assert_eq!(
        (requests[1].method.as_str(), requests[1].path.as_str()),
        ("DELETE", "/api/user/keys/42")
    );
}

#[tokio::test]
async fn create_repo_posts_to_collection() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::ok(json!({ "owner": "octo", "name": "demo" })))
        .await;

    let envelope = api_for(&backend)
        .repo
        .create(&CreateRepoRequest {
            name: "demo".to_string(),
            description: String::new(),
            private: true,
            init_readme: false,
        })
        .await
        .unwrap();
    assert_eq!(envelope.data().unwrap().default_branch, "main");

    let req = only_request(&backend).await;
    assert_eq!((req.method.as_str(), req.path.as_str()), ("POST", "/api/repo"));
    assert_eq!(req.json()["private"], json!(true));
}

#[tokio::test]
async fn non_success_envelope_is_returned_untouched() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::envelope(
            403,
            json!({ "owner": "octo", "name": "secret" }),
            "forbidden",
        ))
        .await;

    let envelope = api_for(&backend).repo.info("octo", "secret").await.unwrap();
    assert_eq!(envelope.code(), 403);
    assert_eq!(envelope.raw_msg(), "forbidden");
    assert!(envelope.data().is_none());
    assert_eq!(backend.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn failure_envelope_with_mismatched_data_is_still_returned() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::envelope(404, json!(""), "repository not found"))
        .await;
    backend
        .enqueue_response(MockResponse::envelope(500, json!({ "trace": [1, 2] }), "boom"))
        .await;
    let api = api_for(&backend);

    let missing = api.repo.info("octo", "missing").await.unwrap();
    assert_eq!(missing.code(), 404);
    assert_eq!(missing.message(), "repository not found");
    assert!(missing.data().is_none());

    let broken = api.repo.branches("octo", "demo").await.unwrap();
    assert_eq!(broken.code(), 500);
    assert!(broken.data().is_none());
}

#[tokio::test]
async fn dot_segments_never_reach_the_backend() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend);

    let err = api.repo.star("..", "demo").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidPath { .. }), "got {err:?}");
    let err = api.repo.info("octo", "").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidPath { .. }), "got {err:?}");
    let err = api.repo.tree("octo", "demo", "main", "a/../b").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidPath { .. }), "got {err:?}");
    let err = api.user.profile(".").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidPath { .. }), "got {err:?}");

    assert!(backend.captured_requests().await.is_empty());
}

/// Every wrapper method against its method, path, query and body template.
#[tokio::test]
async fn every_template_issues_one_matching_call() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend);

    let login = LoginRequest {
        username: "octo".to_string(),
        password: "hunter2".to_string(),
    };
    let register = RegisterRequest {
        username: "octo".to_string(),
        email: "octo@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    let profile = UpdateProfileRequest {
        display_name: "Octo Cat".to_string(),
        bio: None,
        avatar_url: None,
    };
    let password = ChangePasswordRequest {
        old_password: "hunter2".to_string(),
        new_password: "correct horse".to_string(),
    };
    let key = AddSshKeyRequest {
        title: "laptop".to_string(),
        key: "ssh-ed25519 AAAA".to_string(),
    };
    let repo = CreateRepoRequest {
        name: "demo".to_string(),
        description: String::new(),
        private: false,
        init_readme: true,
    };

    api.auth.login(&login).await.unwrap();
    api.auth.register(&register).await.unwrap();
    api.auth.logout().await.unwrap();
    api.auth.current_user().await.unwrap();
    api.user.profile("octo").await.unwrap();
    api.user.repos("octo").await.unwrap();
    api.user.update_profile(&profile).await.unwrap();
    api.user.change_password(&password).await.unwrap();
    api.user.ssh_keys().await.unwrap();
    api.user.add_ssh_key(&key).await.unwrap();
    api.user.delete_ssh_key(7).await.unwrap();
    api.repo.create(&repo).await.unwrap();
    api.repo.info("octo", "demo").await.unwrap();
    api.repo.delete("octo", "demo").await.unwrap();
    api.repo.star("octo", "demo").await.unwrap();
    api.repo.unstar("octo", "demo").await.unwrap();
    api.repo.fork("octo", "demo").await.unwrap();
    api.repo.branches("octo", "demo").await.unwrap();
    api.repo.commits("octo", "demo", "main").await.unwrap();
    api.repo.tree("octo", "demo", "main", "src").await.unwrap();
    api.repo.blob("octo", "demo", "v1.0", "docs/README.md").await.unwrap();
    api.explore.repos(1, 20).await.unwrap();
    api.explore.users(3, 5).await.unwrap();

    // (method, path, query, has body)
    let expected: &[(&str, &str, Option<&str>, bool)] = &[
        ("POST", "/api/auth/login", None, true),
        ("POST", "/api/auth/register", None, true),
        ("POST", "/api/auth/logout", None, false),
        ("GET", "/api/auth/user", None, false),
        ("GET", "/api/user/octo", None, false),
        ("GET", "/api/user/octo/repos", None, false),
        ("PUT", "/api/user/profile", None, true),
        ("PUT", "/api/user/password", None, true),
        ("GET", "/api/user/keys", None, false),
        ("POST", "/api/user/keys", None, true),
        ("DELETE", "/api/user/keys/7", None, false),
        ("POST", "/api/repo", None, true),
        ("GET", "/api/repo/octo/demo", None, false),
        ("DELETE", "/api/repo/octo/demo", None, false),
        ("POST", "/api/repo/octo/demo/star", None, false),
        ("DELETE", "/api/repo/octo/demo/star", None, false),
        ("POST", "/api/repo/octo/demo/fork", None, false),
        ("GET", "/api/repo/octo/demo/branches", None, false),
        ("GET", "/api/repo/octo/demo/commits/main", None, false),
        ("GET", "/api/repo/octo/demo/tree/main/src", None, false),
        ("GET", "/api/repo/octo/demo/blob/v1.0/docs/README.md", None, false),
        ("GET", "/api/explore/repos", Some("page=1&size=20"), false),
        ("GET", "/api/explore/users", Some("page=3&size=5"), false),
    ];

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), expected.len());
    for (req, (method, path, query, has_body)) in requests.iter().zip(expected) {
        assert_eq!(req.method, *method, "{path}");
        assert_eq!(req.path, *path);
        assert_eq!(req.query.as_deref(), *query, "{path}");
        assert_eq!(!req.body.is_empty(), *has_body, "{method} {path}");
    }

    // Bodies carry the request DTOs as JSON.
    assert_eq!(requests[1].json()["email"], json!("octo@example.com"));
    assert_eq!(requests[7].json()["new_password"], json!("correct horse"));
}

#[tokio::test]
async fn http_error_status_with_envelope_body_is_not_an_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::raw(500, r#"{"code": 500, "msg": "boom"}"#))
        .await;

    let envelope = api_for(&backend).repo.branches("octo", "demo").await.unwrap();
    assert_eq!(envelope.code(), 500);
    assert_eq!(envelope.message(), "boom");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::raw(502, "<html>bad gateway</html>"))
        .await;

    let err = api_for(&backend).repo.info("octo", "demo").await.unwrap_err();
    match err {
        ApiError::Decode { status, path, .. } => {
            assert_eq!(status, 502);
            assert_eq!(path, "/repo/octo/demo");
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = Api::from_client(
        ApiClient::new(&api_config(&format!("http://127.0.0.1:{port}/api"))).unwrap(),
    );

    let err = api.explore.users(1, 20).await.unwrap_err();
    assert!(matches!(err, ApiError::Network { .. }), "got {err:?}");
}

#[tokio::test]
async fn every_call_carries_a_request_id() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend);
    api.auth.logout().await.unwrap();
    api.auth.logout().await.unwrap();

    let requests = backend.captured_requests().await;
    let ids: Vec<&str> = requests
        .iter()
        .map(|r| r.header(REQUEST_ID_HEADER).unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}
