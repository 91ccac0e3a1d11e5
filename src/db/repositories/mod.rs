use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::db::entities::{director, genre, movie};
use crate::error::Result;

pub struct MovieRepository {
    db: DatabaseConnection,
}

impl MovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_by_title(&self, title: &str) -> Result<Option<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(movie::Column::Title.eq(title))
            .one(&self.db)
            .await?)
    }

    /// Movies matching every supplied reference, in primary key order.
    /// With neither reference this is the whole table.
    pub async fn find_filtered(
        &self,
        director_id: Option<i32>,
        genre_id: Option<i32>,
    ) -> Result<Vec<movie::Model>> {
        let mut select = movie::Entity::find();

        if let Some(director_id) = director_id {
            select = select.filter(movie::Column::DirectorId.eq(director_id));
        }

        if let Some(genre_id) = genre_id {
            select = select.filter(movie::Column::GenreId.eq(genre_id));
        }

        Ok(select
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Titles of the movies filed under a genre. Untitled rows are skipped.
    pub async fn titles_for_genre(&self, genre_id: i32) -> Result<Vec<String>> {
        let titles: Vec<Option<String>> = movie::Entity::find()
            .select_only()
            .column(movie::Column::Title)
            .filter(movie::Column::GenreId.eq(genre_id))
            .order_by_asc(movie::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(titles.into_iter().flatten().collect())
    }

    pub async fn create(&self, movie: movie::ActiveModel) -> Result<movie::Model> {
        Ok(movie.insert(&self.db).await?)
    }

    pub async fn update(&self, movie: movie::ActiveModel) -> Result<movie::Model> {
        Ok(movie.update(&self.db).await?)
    }

    pub async fn delete(&self, movie: movie::Model) -> Result<()> {
        movie.delete(&self.db).await?;
        Ok(())
    }
}

pub struct DirectorRepository {
    db: DatabaseConnection,
}

impl DirectorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<director::Model>> {
        Ok(director::Entity::find()
            .order_by_asc(director::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<director::Model>> {
        Ok(director::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<director::Model>> {
        Ok(director::Entity::find()
            .filter(director::Column::Name.eq(name))
            .one(&self.db)
            .await?)
    }

    pub async fn create(&self, director: director::ActiveModel) -> Result<director::Model> {
        Ok(director.insert(&self.db).await?)
    }

    pub async fn update(&self, director: director::ActiveModel) -> Result<director::Model> {
        Ok(director.update(&self.db).await?)
    }

    pub async fn delete(&self, director: director::Model) -> Result<()> {
        director.delete(&self.db).await?;
        Ok(())
    }
}

pub struct GenreRepository {
    db: DatabaseConnection,
}

impl GenreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<genre::Model>> {
        Ok(genre::Entity::find()
            .order_by_asc(genre::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<genre::Model>> {
        Ok(genre::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<genre::Model>> {
        Ok(genre::Entity::find()
            .filter(genre::Column::Name.eq(name))
            .one(&self.db)
            .await?)
    }

    pub async fn create(&self, genre: genre::ActiveModel) -> Result<genre::Model> {
        Ok(genre.insert(&self.db).await?)
    }

    pub async fn update(&self, genre: genre::ActiveModel) -> Result<genre::Model> {
        Ok(genre.update(&self.db).await?)
    }

    pub async fn delete(&self, genre: genre::Model) -> Result<()> {
        genre.delete(&self.db).await?;
        Ok(())
    }
}
