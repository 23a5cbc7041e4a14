#[cfg(test)]
mod tests {
    use serde_json::json;
    use taskdeck::api::{ApiError, Fetch, FetchOptions, JsonPlaceholder, ResponseCache};
    use taskdeck::libs::config::Config;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn users_body() -> serde_json::Value {
        json!([
            { "id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz" },
            { "id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv" }
        ])
    }

    fn todos_body() -> serde_json::Value {
        json!([
            { "userId": 1, "id": 1, "title": "delectus aut autem", "completed": false },
            { "userId": 1, "id": 2, "title": "quis ut nam facilis et officia qui", "completed": true },
            { "userId": 3, "id": 3, "title": "fugiat veniam minus", "completed": false }
        ])
    }

    async fn client() -> (MockServer, JsonPlaceholder) {
        let server = MockServer::start().await;
        let client = JsonPlaceholder::new(&server.uri(), ResponseCache::new());
        (server, client)
    }

    #[tokio::test]
    async fn test_fetch_users() {
        let (server, client) = client().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .mount(&server)
            .await;

        let users = client.fetch_users(FetchOptions::default()).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].username.as_deref(), Some("Antonette"));
    }

    #[tokio::test]
    async fn test_fetch_todos() {
        let (server, client) = client().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(todos_body()))
            .mount(&server)
            .await;

        let todos = client.fetch_todos(FetchOptions::default()).await.unwrap();
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[1].title, "quis ut nam facilis et officia qui");
        assert!(todos[1].completed);
        assert_eq!(todos[2].user_id, 3);
    }

    #[tokio::test]
    async fn test_fetch_user_todos_sends_query() {
        let (server, client) = client().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .and(query_param("userId", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "userId": 3, "id": 3, "title": "fugiat veniam minus", "completed": false }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let todos = client.fetch_user_todos(3, FetchOptions::default()).await.unwrap();
        assert_eq!(todos.len(), 1);
        assert!(client.cache().contains("todos?userId=3"));
    }

    #[tokio::test]
    async fn test_repeat_request_is_served_from_cache() {
        let (server, client) = client().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .expect(1)
            .mount(&server)
            .await;

        let first = client.fetch_users(FetchOptions::default()).await.unwrap();
        let second = client.fetch_users(FetchOptions::default()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.cache().len(), 1);
        assert!(client.cache().contains("users"));
    }

    #[tokio::test]
    async fn test_bypass_cache_requests_again_without_storing() {
        let (server, client) = client().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .expect(2)
            .mount(&server)
            .await;

        client.fetch_users(FetchOptions::bypass_cache()).await.unwrap();
        assert!(client.cache().is_empty());

        client.fetch_users(FetchOptions::bypass_cache()).await.unwrap();
        assert!(client.cache().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_the_cache() {
        let (server, client) = client().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(todos_body()))
            .expect(1)
            .mount(&server)
            .await;

        let other = client.clone();
        client.fetch_todos(FetchOptions::default()).await.unwrap();
        let todos = other.fetch_todos(FetchOptions::default()).await.unwrap();
        assert_eq!(todos.len(), 3);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let (server, client) = client().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .expect(2)
            .mount(&server)
            .await;

        client.fetch_users(FetchOptions::default()).await.unwrap();
        client.clear_cache();
        assert!(client.cache().is_empty());
        client.fetch_users(FetchOptions::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let (server, client) = client().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client.fetch_users(FetchOptions::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert_eq!(err.to_string(), "HTTP 500 while fetching users");
        assert!(client.cache().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_body() {
        let (server, client) = client().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client.fetch_todos(FetchOptions::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(err.to_string().starts_with("Invalid JSON for todos: "));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_a_decode_error() {
        let (server, client) = client().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
            .mount(&server)
            .await;

        let err = client.fetch_users(FetchOptions::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(client.cache().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_network_error() {
        let client = JsonPlaceholder::new("http://127.0.0.1:1", ResponseCache::new());

        let err = client.fetch_users(FetchOptions::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Network { .. }));
        assert!(err.to_string().starts_with("Network error fetching users"));
    }

    #[tokio::test]
    async fn test_from_config_trims_trailing_slash() {
        let (server, _) = client().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .expect(1)
            .mount(&server)
            .await;

        let config = Config {
            api_url: format!("{}/", server.uri()),
            ..Config::default()
        };
        let client = JsonPlaceholder::from_config(&config, ResponseCache::new()).unwrap();

        assert_eq!(client.base_url(), server.uri());
        assert_eq!(client.fetch_users(FetchOptions::default()).await.unwrap().len(), 2);
    }
}
