mod common;

use serde_json::json;

#[tokio::test]
async fn create_project_applies_defaults_and_seeds_files() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let project = app.create_project("alice", "Landing page").await;
    assert_eq!(project["name"], "Landing page");
    assert_eq!(project["user_id"], "alice");
    assert_eq!(project["framework"], "react");
    assert_eq!(project["template"], "blank");
    assert_eq!(project["is_deployed"], false);
    assert!(project["deployment_url"].is_null());

    let id = project["id"].as_str().unwrap();
    let files: Vec<serde_json::Value> = app
        .get(&format!("/projects/{}/files", id), "alice")
        .await
        .json()
        .await
        .unwrap();

    let mut paths: Vec<&str> = files
        .iter()
        .map(|file| file["file_path"].as_str().unwrap())
        .collect();
    paths.sort();
    assert_eq!(paths, vec!["App.tsx", "index.html", "styles.css"]);
}

#[tokio::test]
async fn non_blank_template_gets_no_starter_files() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .post(
            "/projects",
            "alice",
            json!({ "name": "Shop", "framework": "vue", "template": "ecommerce" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let project: serde_json::Value = response.json().await.unwrap();
    assert_eq!(project["framework"], "vue");

    let files: Vec<serde_json::Value> = app
        .get(&format!("/projects/{}/files", project["id"].as_str().unwrap()), "alice")
        .await
        .json()
        .await
        .unwrap();
    assert!(files.is_empty());
}

#[tokio::test]
async fn invalid_project_is_rejected() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    for body in [
        json!({ "name": "" }),
        json!({ "name": "ok", "framework": "svelte" }),
        json!({ "name": "ok", "owner": "mallory" }),
        json!({}),
    ] {
        let response = app.post("/projects", "alice", body).await;
        assert_eq!(response.status().as_u16(), 400);
    }
}

#[tokio::test]
async fn projects_are_scoped_to_their_owner() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let project = app.create_project("alice", "Private").await;
    let id = project["id"].as_str().unwrap();

    let response = app.get(&format!("/projects/{}", id), "bob").await;
    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], format!("Project with ID {} not found", id));

    let list: Vec<serde_json::Value> = app.get("/projects", "bob").await.json().await.unwrap();
    assert!(list.is_empty());

    let response = app
        .patch(&format!("/projects/{}", id), "bob", json!({ "name": "Mine" }))
        .await;
    assert_eq!(response.status().as_u16(), 404);

    let response = app.delete(&format!("/projects/{}", id), "bob").await;
    assert_eq!(response.status().as_u16(), 404);

    let response = app.get(&format!("/projects/{}", id), "alice").await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn opened_project_moves_to_the_top() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let first = app.create_project("alice", "First").await;
    let _second = app.create_project("alice", "Second").await;
    let first_id = first["id"].as_str().unwrap();

    let response = app
        .patch(&format!("/projects/{}/open", first_id), "alice", json!({}))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let opened: serde_json::Value = response.json().await.unwrap();
    assert!(opened["last_opened_at"].is_string());

    let list: Vec<serde_json::Value> = app.get("/projects", "alice").await.json().await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], first["id"]);
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let project = app.create_project("alice", "Before").await;
    let id = project["id"].as_str().unwrap();

    let response = app
        .patch(
            &format!("/projects/{}", id),
            "alice",
            json!({ "name": "After", "thumbnail_url": "https://cdn.example.com/a.png" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["name"], "After");
    assert_eq!(updated["thumbnail_url"], "https://cdn.example.com/a.png");
    assert_eq!(updated["framework"], project["framework"]);
    assert_eq!(updated["created_at"], project["created_at"]);
}

#[tokio::test]
async fn delete_project_removes_it() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let project = app.create_project("alice", "Temp").await;
    let id = project["id"].as_str().unwrap();

    let response = app.delete(&format!("/projects/{}", id), "alice").await;
    assert_eq!(response.status().as_u16(), 204);

    let response = app.get(&format!("/projects/{}", id), "alice").await;
    assert_eq!(response.status().as_u16(), 404);

    let files: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM project_files WHERE project_id = $1")
        .bind(uuid::Uuid::parse_str(id).unwrap())
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(files, 0);
}

#[tokio::test]
async fn rename_after_deploy_keeps_deployment_state() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let project = app.create_project("alice", "Shop").await;
    let id = project["id"].as_str().unwrap();
    let project_id = uuid::Uuid::parse_str(id).unwrap();

    let deployment_id = uuid::Uuid::new_v4();
    sqlx::query("INSERT INTO deployments (id, project_id, status) VALUES ($1, $2, 'deploying')")
        .bind(deployment_id)
        .bind(project_id)
        .execute(&app.db_pool)
        .await
        .unwrap();
    let url = "https://shop-abc123.webflowpro.app";
    let completed =
        buildpad::db::deployment::complete(&app.db_pool, deployment_id, url, "done").await;
    assert_eq!(completed.unwrap(), Some(project_id));

    let response = app
        .patch(&format!("/projects/{}", id), "alice", json!({ "name": "Renamed" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["name"], "Renamed");
    assert_eq!(updated["is_deployed"], true);
    assert_eq!(updated["deployment_url"], url);

    let stored: (bool, Option<String>) =
        sqlx::query_as("SELECT is_deployed, deployment_url FROM projects WHERE id = $1")
            .bind(project_id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(stored, (true, Some(url.to_string())));
}

#[tokio::test]
async fn rename_after_simulated_deploy_keeps_live_url() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let project = app.create_project("alice", "Landing").await;
    let id = project["id"].as_str().unwrap();

    let response = app
        .post(&format!("/projects/{}/deploy", id), "alice", json!({}))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let mut live = serde_json::Value::Null;
    for _ in 0..100 {
        let current: serde_json::Value = app
            .get(&format!("/projects/{}", id), "alice")
            .await
            .json()
            .await
            .unwrap();
        if current["is_deployed"] == true {
            live = current;
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
    assert!(live["deployment_url"].is_string(), "project never went live");

    let updated: serde_json::Value = app
        .patch(&format!("/projects/{}", id), "alice", json!({ "name": "Landing v2" }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(updated["name"], "Landing v2");
    assert_eq!(updated["is_deployed"], true);
    assert_eq!(updated["deployment_url"], live["deployment_url"]);
}
