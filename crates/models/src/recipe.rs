use sea_orm::{entity::prelude::*, sea_query::{Expr, OnConflict}, DatabaseConnection, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// One row of the `recipe` table; `name` is the lookup key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipe")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a row unless the key is taken. Single statement
/// (`INSERT .. ON CONFLICT (name) DO NOTHING`); returns whether a row was written.
pub async fn insert_if_absent(db: &DatabaseConnection, name: &str, description: &str) -> Result<bool, errors::ModelError> {
    let am = ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.to_string()),
    };
    let rows = Entity::insert(am)
        .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;
    Ok(rows > 0)
}

pub async fn find(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(name.to_string()).one(db).await?)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Name).all(db).await?)
}

/// `UPDATE recipe SET description = ? WHERE name = ?`; returns rows affected.
pub async fn update_description(db: &DatabaseConnection, name: &str, description: &str) -> Result<u64, errors::ModelError> {
    let res = Entity::update_many()
        .col_expr(Column::Description, Expr::value(description.to_string()))
        .filter(Column::Name.eq(name))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// `DELETE FROM recipe WHERE name = ?`; returns rows affected.
pub async fn delete(db: &DatabaseConnection, name: &str) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_by_id(name.to_string()).exec(db).await?;
    Ok(res.rows_affected)
}
