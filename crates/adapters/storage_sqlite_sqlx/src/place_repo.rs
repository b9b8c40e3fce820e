//! `SQLite` implementation of [`PlaceRepository`].
//!
//! Amenity links live in the `place_amenity` join table. Writes replace the
//! whole link set of a place inside the same transaction as the row itself,
//! and reads attach the links back in insertion order.

use std::collections::HashMap;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqliteConnection, SqlitePool};

use hbnb_app::ports::PlaceRepository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::time;

use crate::error::StorageError;
use crate::row;

struct Wrapper(Place);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;
        let city_id: uuid::Uuid = row.try_get("city_id")?;
        let user_id: uuid::Uuid = row.try_get("user_id")?;

        Ok(Self(Place {
            id: PlaceId::from(id),
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
            city_id: CityId::from(city_id),
            user_id: UserId::from(user_id),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            address: row.try_get("address")?,
            number_rooms: row.try_get("number_rooms")?,
            number_bathrooms: row.try_get("number_bathrooms")?,
            max_guest: row.try_get("max_guest")?,
            price_by_night: row.try_get("price_by_night")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            amenity_ids: Vec::new(),
        }))
    }
}

/// One row of the `place_amenity` join table.
struct Link {
    place_id: PlaceId,
    amenity_id: AmenityId,
}

impl<'r> FromRow<'r, SqliteRow> for Link {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let place_id: uuid::Uuid = row.try_get("place_id")?;
        let amenity_id: uuid::Uuid = row.try_get("amenity_id")?;

        Ok(Self {
            place_id: PlaceId::from(place_id),
            amenity_id: AmenityId::from(amenity_id),
        })
    }
}

/// Attach loaded links to their places.
fn attach(rows: Vec<Wrapper>, links: Vec<Link>) -> Vec<Place> {
    let mut by_place: HashMap<PlaceId, Vec<AmenityId>> = HashMap::new();
    for link in links {
        by_place
            .entry(link.place_id)
            .or_default()
            .push(link.amenity_id);
    }

    rows.into_iter()
        .map(|Wrapper(mut place)| {
            place.amenity_ids = by_place.remove(&place.id).unwrap_or_default();
            place
        })
        .collect()
}

const INSERT: &str = r"
    INSERT INTO places (
        id, created_at, updated_at, city_id, user_id, name, description, address,
        number_rooms, number_bathrooms, max_guest, price_by_night, latitude, longitude
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM places ORDER BY created_at";
const SELECT_BY_CITY: &str = "SELECT * FROM places WHERE city_id = ? ORDER BY created_at";
const UPDATE: &str = r"
    UPDATE places
    SET updated_at = ?, name = ?, description = ?, address = ?, number_rooms = ?,
        number_bathrooms = ?, max_guest = ?, price_by_night = ?, latitude = ?, longitude = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM places";

const INSERT_LINK: &str = "INSERT INTO place_amenity (place_id, amenity_id) VALUES (?, ?)";
const DELETE_LINKS: &str = "DELETE FROM place_amenity WHERE place_id = ?";
const SELECT_LINKS_BY_PLACE: &str =
    "SELECT place_id, amenity_id FROM place_amenity WHERE place_id = ? ORDER BY rowid";
const SELECT_ALL_LINKS: &str = "SELECT place_id, amenity_id FROM place_amenity ORDER BY rowid";
const SELECT_LINKS_BY_CITY: &str = r"
    SELECT pa.place_id, pa.amenity_id
    FROM place_amenity pa
    JOIN places p ON p.id = pa.place_id
    WHERE p.city_id = ?
    ORDER BY pa.rowid
";

async fn replace_links(conn: &mut SqliteConnection, place: &Place) -> Result<(), sqlx::Error> {
    sqlx::query(DELETE_LINKS)
        .bind(place.id.as_uuid())
        .execute(&mut *conn)
        .await?;

    for amenity_id in &place.amenity_ids {
        sqlx::query(INSERT_LINK)
            .bind(place.id.as_uuid())
            .bind(amenity_id.as_uuid())
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

/// `SQLite`-backed place repository.
#[derive(Clone)]
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(place.id.as_uuid())
                .bind(time::to_text(&place.created_at))
                .bind(time::to_text(&place.updated_at))
                .bind(place.city_id.as_uuid())
                .bind(place.user_id.as_uuid())
                .bind(&place.name)
                .bind(place.description.as_deref())
                .bind(place.address.as_deref())
                .bind(place.number_rooms)
                .bind(place.number_bathrooms)
                .bind(place.max_guest)
                .bind(place.price_by_night)
                .bind(place.latitude)
                .bind(place.longitude)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            replace_links(&mut tx, &place)
                .await
                .map_err(StorageError::from)?;
            tx.commit().await.map_err(StorageError::from)?;

            Ok(place)
        }
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_uuid())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            let Some(row) = row else {
                return Ok(None);
            };

            let links: Vec<Link> = sqlx::query_as(SELECT_LINKS_BY_PLACE)
                .bind(id.as_uuid())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(attach(vec![row], links).pop())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;
            let links: Vec<Link> = sqlx::query_as(SELECT_ALL_LINKS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(attach(rows, links))
        }
    }

    fn find_by_city(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CITY)
                .bind(city_id.as_uuid())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;
            let links: Vec<Link> = sqlx::query_as(SELECT_LINKS_BY_CITY)
                .bind(city_id.as_uuid())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(attach(rows, links))
        }
    }

    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(UPDATE)
                .bind(time::to_text(&place.updated_at))
                .bind(&place.name)
                .bind(place.description.as_deref())
                .bind(place.address.as_deref())
                .bind(place.number_rooms)
                .bind(place.number_bathrooms)
                .bind(place.max_guest)
                .bind(place.price_by_night)
                .bind(place.latitude)
                .bind(place.longitude)
                .bind(place.id.as_uuid())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            replace_links(&mut tx, &place)
                .await
                .map_err(StorageError::from)?;
            tx.commit().await.map_err(StorageError::from)?;

            Ok(place)
        }
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_uuid())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let (count,): (i64,) = sqlx::query_as(COUNT)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row::count(count))
        }
    }
}
