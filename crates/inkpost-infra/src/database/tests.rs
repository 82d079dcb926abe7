#[cfg(test)]
mod tests {
    use inkpost_core::domain::{NewPost, Post};
    use inkpost_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::database::PostgresPostRepository;
    use crate::database::entity::post;

    fn row(id: i64, title: &str) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            content: "Content".to_owned(),
            author: "Ana".to_owned(),
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn find_post_by_id_returns_the_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(7, "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(7).await.unwrap();

        let found = result.unwrap();
        assert_eq!(found.id, 7);
        assert_eq!(found.title, "Test Post");
    }

    #[tokio::test]
    async fn find_post_by_id_misses_cleanly() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(1, "first"), row(2, "second")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.find_all().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].title, "second");
    }

    #[tokio::test]
    async fn insert_returns_the_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 42,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![row(42, "Hello")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let id = repo
            .insert(NewPost::new("Hello", "World", "Ana"))
            .await
            .unwrap();
        assert_eq!(id, 42);
    }
}
