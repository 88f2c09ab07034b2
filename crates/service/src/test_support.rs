#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect_with_config;
use configs::DatabaseConfig;

/// Fresh SQLite in-memory database with migrations applied. Each call gets
/// its own database, so tests never see each other's rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Behaviour every `RecipeStore` backend must share. Keys equal names here,
/// so the checks hold for backends that store the key as the name.
pub mod contract {
    use crate::recipe::{Recipe, RecipeStore, StoreError};

    pub const SCENARIOS: usize = 6;

    pub async fn run_all<S, F>(mut fresh: F)
    where
        S: RecipeStore,
        F: FnMut() -> S,
    {
        absent_keys_are_not_found(fresh()).await;
        add_then_get_round_trips(fresh()).await;
        second_add_is_already_exists(fresh()).await;
        update_replaces_whole_value(fresh()).await;
        remove_then_get_is_not_found(fresh()).await;
        list_holds_exactly_what_was_added(fresh()).await;
    }

    async fn absent_keys_are_not_found<S: RecipeStore>(mut store: S) {
        assert_eq!(store.get("ghost").await, Err(StoreError::NotFound));
        assert_eq!(store.update("ghost", Recipe::new("ghost", "x")).await, Err(StoreError::NotFound));
        assert_eq!(store.remove("ghost").await, Err(StoreError::NotFound));
        // update must not have created the entry
        assert_eq!(store.get("ghost").await, Err(StoreError::NotFound));
        assert!(store.list().await.unwrap().is_empty());
    }

    async fn add_then_get_round_trips<S: RecipeStore>(mut store: S) {
        let r = Recipe::new("Tomato Soup", "Hot and red");
        store.add("Tomato Soup", r.clone()).await.unwrap();
        assert_eq!(store.get("Tomato Soup").await.unwrap(), r);
    }

    async fn second_add_is_already_exists<S: RecipeStore>(mut store: S) {
        let r = Recipe::new("soup", "first");
        store.add("soup", r.clone()).await.unwrap();
        assert_eq!(store.add("soup", Recipe::new("soup", "second")).await, Err(StoreError::AlreadyExists));
        assert_eq!(store.get("soup").await.unwrap(), r);
    }

    async fn update_replaces_whole_value<S: RecipeStore>(mut store: S) {
        store.add("curry", Recipe::new("curry", "mild, with rice")).await.unwrap();
        let r2 = Recipe::new("curry", "");
        store.update("curry", r2.clone()).await.unwrap();
        assert_eq!(store.get("curry").await.unwrap(), r2);
    }

    async fn remove_then_get_is_not_found<S: RecipeStore>(mut store: S) {
        let key = common::slugify("Tomato Soup");
        store.add(&key, Recipe::new(key.clone(), "Hot and red")).await.unwrap();
        assert_eq!(store.get(&key).await.unwrap().description, "Hot and red");
        store.remove(&key).await.unwrap();
        assert_eq!(store.get(&key).await, Err(StoreError::NotFound));
        assert_eq!(store.remove(&key).await, Err(StoreError::NotFound));
    }

    async fn list_holds_exactly_what_was_added<S: RecipeStore>(mut store: S) {
        for key in ["c", "a", "b"] {
            store.add(key, Recipe::new(key, format!("{key} desc"))).await.unwrap();
        }
        let all = store.list().await.unwrap();
        let mut keys: Vec<&str> = all.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(all["b"], Recipe::new("b", "b desc"));
    }
}
