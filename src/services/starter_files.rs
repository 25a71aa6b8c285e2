use crate::db;
use crate::models::{Project, ProjectFile};
use sqlx::PgPool;
use uuid::Uuid;

const APP_TSX: &str = "export default function App() { return <div>Hello World</div> }";
const INDEX_HTML: &str = r#"<!DOCTYPE html><html><head><title>My App</title></head><body><div id="root"></div></body></html>"#;
const STYLES_CSS: &str = "body { margin: 0; font-family: sans-serif; }";

pub fn blank_template(project_id: Uuid) -> Vec<ProjectFile> {
    [
        ("App.tsx", APP_TSX, "tsx"),
        ("index.html", INDEX_HTML, "html"),
        ("styles.css", STYLES_CSS, "css"),
    ]
    .into_iter()
    .map(|(path, content, file_type)| {
        ProjectFile::new(
            project_id,
            path.to_string(),
            content.to_string(),
            file_type.to_string(),
        )
    })
    .collect()
}

/// Seeds a freshly created blank project. Failures are logged only: the
/// project itself already exists and is returned to the caller regardless.
pub async fn seed(pool: &PgPool, project: &Project) {
    if !project.is_blank() {
        return;
    }

    if let Err(err) = db::project_file::insert_many(pool, blank_template(project.id)).await {
        tracing::error!(project_id = %project.id, "Failed to create starter files: {:?}", err);
    }
}
