//! SQLite-backed character library.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use dragonbane_domain::{Character, CharacterId, CharacterRecord};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::infrastructure::ports::{CharacterQuery, CharacterStore, ClockPort, StoreError};

const COLUMNS: &str = "id, name, kin, profession, age, \
    strength, constitution, agility, intelligence, willpower, charisma, \
    heroic_abilities, trained_skills, magic, gear, appearance_seeds, \
    weakness, memento, appearance, background, narrated, created_at";

/// SQLite implementation of the character library.
pub struct SqliteCharacterStore {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteCharacterStore {
    /// Open (creating if needed) the database file at `db_path`.
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, StoreError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| StoreError::database("connect", e))?;
        Self::with_pool(pool, clock).await
    }

    /// Private in-memory database on a single pinned connection.
    pub async fn in_memory(clock: Arc<dyn ClockPort>) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| StoreError::database("connect", e))?;
        Self::with_pool(pool, clock).await
    }

    async fn with_pool(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Result<Self, StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                kin TEXT NOT NULL,
                profession TEXT NOT NULL,
                age TEXT NOT NULL,
                strength INTEGER NOT NULL,
                constitution INTEGER NOT NULL,
                agility INTEGER NOT NULL,
                intelligence INTEGER NOT NULL,
                willpower INTEGER NOT NULL,
                charisma INTEGER NOT NULL,
                heroic_abilities TEXT NOT NULL,
                trained_skills TEXT NOT NULL,
                magic TEXT NOT NULL,
                gear TEXT NOT NULL,
                appearance_seeds TEXT NOT NULL,
                weakness TEXT NOT NULL,
                memento TEXT NOT NULL,
                appearance TEXT NOT NULL,
                background TEXT NOT NULL,
                narrated INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::database("migrate", e))?;

        Ok(Self { pool, clock })
    }
}

// =============================================================================
// Row mapping
// =============================================================================

fn to_json(values: &[String]) -> Result<String, StoreError> {
    serde_json::to_string(values).map_err(StoreError::serialization)
}

fn from_json(row: &SqliteRow, column: &str) -> Result<Vec<String>, StoreError> {
    let raw: String = row.get(column);
    serde_json::from_str(&raw)
        .map_err(|e| StoreError::serialization(format!("column {column}: {e}")))
}

fn row_to_character(row: &SqliteRow) -> Result<Character, StoreError> {
    let created_at: String = row.get("created_at");
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| StoreError::serialization(format!("created_at: {e}")))?
        .with_timezone(&Utc);

    let record = CharacterRecord {
        id: row.get("id"),
        name: row.get("name"),
        kin: row.get("kin"),
        profession: row.get("profession"),
        age: row.get("age"),
        strength: row.get("strength"),
        constitution: row.get("constitution"),
        agility: row.get("agility"),
        intelligence: row.get("intelligence"),
        willpower: row.get("willpower"),
        charisma: row.get("charisma"),
        heroic_abilities: from_json(row, "heroic_abilities")?,
        trained_skills: from_json(row, "trained_skills")?,
        magic: from_json(row, "magic")?,
        gear: from_json(row, "gear")?,
        appearance_seeds: from_json(row, "appearance_seeds")?,
        weakness: row.get("weakness"),
        memento: row.get("memento"),
        appearance: row.get("appearance"),
        background: row.get("background"),
        narrated: row.get("narrated"),
        created_at,
    };
    Ok(Character::try_from(record)?)
}

/// `WHERE` clause for a query plus the values to bind, in order.
fn where_clause(query: &CharacterQuery) -> (String, Vec<String>) {
    let mut conditions = Vec::new();
    let mut binds = Vec::new();

    if !query.kin.is_empty() {
        conditions.push(format!("kin IN ({})", placeholders(query.kin.len())));
        binds.extend(query.kin.iter().map(|k| k.display_name().to_string()));
    }
    if !query.professions.is_empty() {
        conditions.push(format!(
            "profession IN ({})",
            placeholders(query.professions.len())
        ));
        binds.extend(
            query
                .professions
                .iter()
                .map(|p| p.display_name().to_string()),
        );
    }

    if conditions.is_empty() {
        (String::new(), binds)
    } else {
        (format!("WHERE {}", conditions.join(" AND ")), binds)
    }
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

// =============================================================================
// Port implementation
// =============================================================================

#[async_trait]
impl CharacterStore for SqliteCharacterStore {
    async fn save(&self, character: &Character) -> Result<(), StoreError> {
        let created_at = self.clock.now();
        let record = CharacterRecord::from_character(character, created_at);

        sqlx::query(
            r#"
            INSERT INTO characters (
                id, name, kin, profession, age,
                strength, constitution, agility, intelligence, willpower, charisma,
                heroic_abilities, trained_skills, magic, gear, appearance_seeds,
                weakness, memento, appearance, background, narrated, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                appearance = excluded.appearance,
                background = excluded.background,
                narrated = excluded.narrated
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.kin)
        .bind(&record.profession)
        .bind(&record.age)
        .bind(record.strength)
        .bind(record.constitution)
        .bind(record.agility)
        .bind(record.intelligence)
        .bind(record.willpower)
        .bind(record.charisma)
        .bind(to_json(&record.heroic_abilities)?)
        .bind(to_json(&record.trained_skills)?)
        .bind(to_json(&record.magic)?)
        .bind(to_json(&record.gear)?)
        .bind(to_json(&record.appearance_seeds)?)
        .bind(&record.weakness)
        .bind(&record.memento)
        .bind(&record.appearance)
        .bind(&record.background)
        .bind(record.narrated)
        .bind(format_timestamp(created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database("save", e))?;

        tracing::debug!(character_id = %character.id, "Saved character");
        Ok(())
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM characters WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::database("get", e))?;

        row.as_ref().map(row_to_character).transpose()
    }

    async fn list(
        &self,
        query: &CharacterQuery,
        limit: u32,
    ) -> Result<Vec<Character>, StoreError> {
        let (clause, binds) = where_clause(query);
        let sql = format!(
            "SELECT {COLUMNS} FROM characters {clause} ORDER BY created_at DESC, rowid DESC LIMIT ?"
        );

        let mut q = sqlx::query(&sql);
        for value in binds {
            q = q.bind(value);
        }
        let rows = q
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::database("list", e))?;

        rows.iter().map(row_to_character).collect()
    }

    async fn random(&self, query: &CharacterQuery) -> Result<Option<Character>, StoreError> {
        let (clause, binds) = where_clause(query);
        let sql = format!("SELECT {COLUMNS} FROM characters {clause} ORDER BY RANDOM() LIMIT 1");

        let mut q = sqlx::query(&sql);
        for value in binds {
            q = q.bind(value);
        }
        let row = q
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::database("random", e))?;

        row.as_ref().map(row_to_character).transpose()
    }

    async fn delete(&self, id: CharacterId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::database("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Character", id));
        }
        Ok(())
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockClockPort;
    use crate::test_fixtures::sample_character;
    use chrono::TimeZone;
    use dragonbane_domain::{Kin, Narrative, Profession};

    fn fixed_clock() -> Arc<dyn ClockPort> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()))
    }

    async fn store() -> SqliteCharacterStore {
        SqliteCharacterStore::in_memory(fixed_clock()).await.unwrap()
    }

    fn character(kin: Kin, profession: Profession) -> Character {
        let mut character = sample_character();
        character.id = CharacterId::new();
        character.kin = kin;
        character.profession = profession;
        character
    }

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let store = store().await;
        let character = sample_character();
        store.save(&character).await.unwrap();

        let loaded = store.get(character.id).await.unwrap().unwrap();
        assert_eq!(loaded, character);
        assert!(store.get(CharacterId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn saving_again_updates_narrative() {
        let store = store().await;
        let mut character = sample_character();
        store.save(&character).await.unwrap();

        character
            .apply_narrative(Narrative {
                name: "Orla Fenn".into(),
                appearance: "Freckled.".into(),
                background: "Ferry keeper.".into(),
            })
            .unwrap();
        store.save(&character).await.unwrap();

        let loaded = store.get(character.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "Orla Fenn");
        assert!(loaded.narrated);
        let all = store.list(&CharacterQuery::new(), 50).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn list_filters_and_orders_newest_first() {
        let store = store().await;
        let elf = character(Kin::Elf, Profession::Hunter);
        let dwarf = character(Kin::Dwarf, Profession::Artisan);
        let orc = character(Kin::Orc, Profession::Hunter);
        for c in [&elf, &dwarf, &orc] {
            store.save(c).await.unwrap();
        }

        let all = store.list(&CharacterQuery::new(), 50).await.unwrap();
        let ids: Vec<CharacterId> = all.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![orc.id, dwarf.id, elf.id]);

        let hunters = CharacterQuery::new().with_professions([Profession::Hunter]);
        assert_eq!(store.list(&hunters, 50).await.unwrap().len(), 2);

        let elf_hunters = hunters.with_kin([Kin::Elf, Kin::Dwarf]);
        let found = store.list(&elf_hunters, 50).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, elf.id);

        assert_eq!(store.list(&CharacterQuery::new(), 2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn filter_sets_or_within_and_across() {
        let store = store().await;
        let dwarf_hunter = character(Kin::Dwarf, Profession::Hunter);
        let dwarf_thief = character(Kin::Dwarf, Profession::Thief);
        let human_hunter = character(Kin::Human, Profession::Hunter);
        let elf_bard = character(Kin::Elf, Profession::Bard);
        for c in [&dwarf_hunter, &dwarf_thief, &human_hunter, &elf_bard] {
            store.save(c).await.unwrap();
        }

        let either_kin = CharacterQuery::new().with_kin([Kin::Elf, Kin::Dwarf]);
        let mut ids: Vec<CharacterId> = store
            .list(&either_kin, 50)
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        ids.sort_by_key(|id| id.to_string());
        let mut expected = vec![dwarf_hunter.id, dwarf_thief.id, elf_bard.id];
        expected.sort_by_key(|id| id.to_string());
        assert_eq!(ids, expected);

        let dwarf_hunters = either_kin.with_professions([Profession::Hunter]);
        let found = store.list(&dwarf_hunters, 50).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, dwarf_hunter.id);

        let nobody = CharacterQuery::new()
            .with_kin([Kin::Human])
            .with_professions([Profession::Bard]);
        assert!(store.list(&nobody, 50).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn newer_timestamps_list_first() {
        let mut clock = MockClockPort::new();
        let mut minute = 0;
        clock.expect_now().returning(move || {
            minute += 1;
            Utc.with_ymd_and_hms(2026, 3, 1, 12, minute, 0).unwrap()
        });
        let store = SqliteCharacterStore::in_memory(Arc::new(clock)).await.unwrap();

        let first = character(Kin::Human, Profession::Bard);
        let second = character(Kin::Human, Profession::Bard);
        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();

        let listed = store.list(&CharacterQuery::new(), 10).await.unwrap();
        assert_eq!(listed[0].id, second.id);
    }

    #[tokio::test]
    async fn random_respects_filter() {
        let store = store().await;
        assert!(store.random(&CharacterQuery::new()).await.unwrap().is_none());

        store.save(&character(Kin::Elf, Profession::Hunter)).await.unwrap();
        store.save(&character(Kin::Goblin, Profession::Thief)).await.unwrap();

        let goblins = CharacterQuery::new().with_kin([Kin::Goblin]);
        for _ in 0..10 {
            let picked = store.random(&goblins).await.unwrap().unwrap();
            assert_eq!(picked.kin, Kin::Goblin);
        }
        let satyrs = CharacterQuery::new().with_kin([Kin::Satyr]);
        assert!(store.random(&satyrs).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_or_reports_missing() {
        let store = store().await;
        let character = sample_character();
        store.save(&character).await.unwrap();

        store.delete(character.id).await.unwrap();
        assert!(store.get(character.id).await.unwrap().is_none());
        let err = store.delete(character.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn corrupt_rows_surface_domain_errors() {
        let store = store().await;
        let character = sample_character();
        store.save(&character).await.unwrap();
        sqlx::query("UPDATE characters SET kin = 'Dragon'")
            .execute(&store.pool)
            .await
            .unwrap();

        let err = store.get(character.id).await.unwrap_err();
        assert!(matches!(err, StoreError::Domain(_)));
    }

    #[tokio::test]
    async fn file_database_persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.sqlite");
        let path = path.to_string_lossy().to_string();
        let character = sample_character();

        {
            let store = SqliteCharacterStore::new(&path, fixed_clock()).await.unwrap();
            store.save(&character).await.unwrap();
            store.pool.close().await;
        }

        let reopened = SqliteCharacterStore::new(&path, fixed_clock()).await.unwrap();
        assert_eq!(reopened.get(character.id).await.unwrap(), Some(character));
    }
}
