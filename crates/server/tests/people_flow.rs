//! Parameter-handling edge cases for the /people endpoint, including the
//! legacy conjunctive check: a request is only rejected up front when every
//! required parameter is absent.

use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::storage::memory::MemoryPeopleStore;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState {
        people: MemoryPeopleStore::new(),
    };
    let app: Router = routes::build_router(CorsLayer::very_permissive(), state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn get_without_name_is_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = client().get(format!("{}/people", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "missing name parameter");
    Ok(())
}

#[tokio::test]
async fn get_with_empty_name_counts_as_missing() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = client().get(format!("{}/people?name=", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "missing name parameter");
    Ok(())
}

#[tokio::test]
async fn delete_without_name_is_bad_request_with_empty_body() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = client().delete(format!("{}/people", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    // Unlike the other handlers, delete writes no error text.
    assert_eq!(res.text().await?, "");
    Ok(())
}

#[tokio::test]
async fn delete_is_idempotent_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Deleting a name nobody created still reports success.
    let res = c.delete(format!("{}/people?name=ghost", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "deleted successfully");

    let res = c
        .post(format!("{}/people?name=ghost&location=attic&age=200", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    for _ in 0..2 {
        let res = c.delete(format!("{}/people?name=ghost", app.base_url)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
        assert_eq!(res.text().await?, "deleted successfully");
    }

    let res = c.get(format!("{}/people?name=ghost", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "ghost not found");
    Ok(())
}

#[tokio::test]
async fn post_with_all_params_missing_reports_first_error() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = client().post(format!("{}/people", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "missing name parameter");
    Ok(())
}

#[tokio::test]
async fn post_with_partial_params_creates_with_empty_fields() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Only age missing: the conjunctive check lets this through and the
    // record is stored with an empty age.
    let res = c
        .post(format!("{}/people?name=carol&location=leeds", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/people?name=carol", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "[carol found, leeds found,  found]");
    Ok(())
}

#[tokio::test]
async fn patch_with_all_params_missing_is_bad_request_with_empty_body() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = client().patch(format!("{}/people", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "");
    Ok(())
}

#[tokio::test]
async fn patch_on_absent_name_is_not_found_and_creates_nothing() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .patch(format!("{}/people?name=zed&location=x&age=9", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "zed not found");

    let res = c.get(format!("{}/people?name=zed", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn patch_with_only_name_present_clears_other_fields() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/people?name=dan&location=york&age=33", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // location and age absent: the check passes because name is present,
    // and the empty defaults overwrite the stored fields.
    let res = c.patch(format!("{}/people?name=dan", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "update successfully");

    let res = c.get(format!("{}/people?name=dan", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "[dan found,  found,  found]");
    Ok(())
}
