//! Database repository for CRUD operations.
//!
//! Uses prepared statements and transactions for data integrity.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::locale::Locale;
use crate::models::{
    confirmation_expiry, Argument, Campaign, CampaignEntry, CreateArgumentRequest,
    CreateCampaignRequest, CreatePoliticianRequest, CreateRegionRequest, EntryExport, EntryView,
    LobbyForm, Person, Politician, PoliticianListing, Region, WipCount,
};

const PERSON_COLUMNS: &str = "id, email, first_name, last_name, city, confirmation_token, \
     confirmation_expires, confirmed, language, created_at";

const ENTRY_COLUMNS: &str = "id, person_id, campaign_id, politician_id, argument_id, \
     opt_in_information, confirmed, color, created_at";

const ENTRY_VIEW_SELECT: &str = r#"
    SELECT e.id, e.color, e.confirmed, e.created_at, e.argument_id,
           pe.first_name, pe.last_name, pe.city,
           po.slug AS politician_slug,
           po.first_name AS politician_first_name,
           po.last_name AS politician_last_name,
           a.title AS argument_title
    FROM campaign_entries e
    JOIN persons pe ON pe.id = e.person_id
    JOIN politicians po ON po.id = e.politician_id
    JOIN arguments a ON a.id = e.argument_id
"#;

/// A validated lobby form ready to be stored.
#[derive(Debug)]
pub struct Submission<'a> {
    pub campaign_id: i64,
    pub politician_id: i64,
    pub argument_id: i64,
    pub form: &'a LobbyForm,
    pub locale: Locale,
    /// Issued only if the person needs a token
    pub token: String,
    /// Used only if a new entry is created
    pub color: String,
    pub now: DateTime<Utc>,
}

/// Result of storing a submission.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub person: Person,
    pub entry: CampaignEntry,
    pub entry_created: bool,
}

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== REGION OPERATIONS ====================

    /// List all regions.
    pub async fn list_regions(&self) -> Result<Vec<Region>, AppError> {
        let rows = sqlx::query("SELECT id, slug, name FROM regions ORDER BY slug")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(region_from_row).collect())
    }

    /// Get a region by ID.
    pub async fn get_region(&self, id: i64) -> Result<Option<Region>, AppError> {
        let row = sqlx::query("SELECT id, slug, name FROM regions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(region_from_row))
    }

    /// Get a region by slug.
    pub async fn get_region_by_slug(&self, slug: &str) -> Result<Option<Region>, AppError> {
        let row = sqlx::query("SELECT id, slug, name FROM regions WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(region_from_row))
    }

    /// Create a new region.
    pub async fn create_region(&self, request: &CreateRegionRequest) -> Result<Region, AppError> {
        let result = sqlx::query("INSERT INTO regions (slug, name) VALUES (?, ?)")
            .bind(&request.slug)
            .bind(&request.name)
            .execute(&self.pool)
            .await?;

        Ok(Region {
            id: result.last_insert_rowid(),
            slug: request.slug.clone(),
            name: request.name.clone(),
        })
    }

    /// Resolve region slugs, failing on the first unknown one.
    async fn regions_by_slugs(&self, slugs: &[String]) -> Result<Vec<Region>, AppError> {
        let mut regions = Vec::with_capacity(slugs.len());
        for slug in slugs {
            let region = self
                .get_region_by_slug(slug)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Region {} not found", slug)))?;
            regions.push(region);
        }
        Ok(regions)
    }

    // ==================== CAMPAIGN OPERATIONS ====================

    /// List all campaigns.
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, AppError> {
        let rows = sqlx::query(
            "SELECT id, slug, name, politician_type, created_at FROM campaigns ORDER BY slug",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut campaigns: Vec<Campaign> = rows.iter().map(campaign_from_row).collect();
        for campaign in &mut campaigns {
            campaign.regions = self.campaign_regions(campaign.id).await?;
        }
        Ok(campaigns)
    }

    /// Get a campaign by slug, including its region scope.
    pub async fn get_campaign_by_slug(&self, slug: &str) -> Result<Option<Campaign>, AppError> {
        let row = sqlx::query(
            "SELECT id, slug, name, politician_type, created_at FROM campaigns WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut campaign = campaign_from_row(&row);
        campaign.regions = self.campaign_regions(campaign.id).await?;
        Ok(Some(campaign))
    }

    async fn campaign_regions(&self, campaign_id: i64) -> Result<Vec<Region>, AppError> {
        let rows = sqlx::query(
            r#"SELECT r.id, r.slug, r.name FROM regions r
               JOIN campaign_regions cr ON cr.region_id = r.id
               WHERE cr.campaign_id = ? ORDER BY r.slug"#,
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(region_from_row).collect())
    }

    /// Create a campaign scoped to the given regions.
    pub async fn create_campaign(
        &self,
        request: &CreateCampaignRequest,
    ) -> Result<Campaign, AppError> {
        let regions = self.regions_by_slugs(&request.regions).await?;
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO campaigns (slug, name, politician_type, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&request.slug)
        .bind(&request.name)
        .bind(&request.politician_type)
        .bind(now)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();

        for region in &regions {
            sqlx::query("INSERT INTO campaign_regions (campaign_id, region_id) VALUES (?, ?)")
                .bind(id)
                .bind(region.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Campaign {
            id,
            slug: request.slug.clone(),
            name: request.name.clone(),
            politician_type: request.politician_type.clone(),
            regions,
            created_at: now,
        })
    }

    // ==================== POLITICIAN OPERATIONS ====================

    /// List all politicians.
    pub async fn list_politicians(&self) -> Result<Vec<Politician>, AppError> {
        let rows = sqlx::query(
            "SELECT id, slug, first_name, last_name, party, politician_type FROM politicians ORDER BY last_name, first_name",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut politicians: Vec<Politician> = rows.iter().map(politician_from_row).collect();
        self.attach_politician_regions(&mut politicians).await?;
        Ok(politicians)
    }

    /// Get a politician by slug.
    pub async fn get_politician_by_slug(&self, slug: &str) -> Result<Option<Politician>, AppError> {
        let row = sqlx::query(
            "SELECT id, slug, first_name, last_name, party, politician_type FROM politicians WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut politicians = vec![politician_from_row(&row)];
        self.attach_politician_regions(&mut politicians).await?;
        Ok(politicians.pop())
    }

    /// Create a politician elected in the given regions.
    pub async fn create_politician(
        &self,
        request: &CreatePoliticianRequest,
    ) -> Result<Politician, AppError> {
        let regions = self.regions_by_slugs(&request.regions).await?;

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO politicians (slug, first_name, last_name, party, politician_type) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&request.slug)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.party)
        .bind(&request.politician_type)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();

        for region in &regions {
            sqlx::query("INSERT INTO politician_regions (politician_id, region_id) VALUES (?, ?)")
                .bind(id)
                .bind(region.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Politician {
            id,
            slug: request.slug.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            party: request.party.clone(),
            politician_type: request.politician_type.clone(),
            regions,
        })
    }

    /// Politicians a campaign addresses: same politician type, and within
    /// the campaign's regions when it has any.
    pub async fn politicians_for_campaign(
        &self,
        campaign: &Campaign,
    ) -> Result<Vec<PoliticianListing>, AppError> {
        let rows = sqlx::query(
            r#"SELECT p.id, p.slug, p.first_name, p.last_name, p.party, p.politician_type
               FROM politicians p
               WHERE p.politician_type = ?
                 AND (
                   NOT EXISTS (SELECT 1 FROM campaign_regions cr WHERE cr.campaign_id = ?)
                   OR EXISTS (
                     SELECT 1 FROM politician_regions pr
                     JOIN campaign_regions cr ON cr.region_id = pr.region_id
                     WHERE pr.politician_id = p.id AND cr.campaign_id = ?
                   )
                 )
               ORDER BY p.last_name, p.first_name"#,
        )
        .bind(&campaign.politician_type)
        .bind(campaign.id)
        .bind(campaign.id)
        .fetch_all(&self.pool)
        .await?;

        let politicians = rows.iter().map(politician_from_row).collect();
        self.listings(campaign.id, politicians).await
    }

    /// Politicians of the campaign's type elected in `region`.
    pub async fn politicians_in_region(
        &self,
        campaign: &Campaign,
        region: &Region,
    ) -> Result<Vec<PoliticianListing>, AppError> {
        let rows = sqlx::query(
            r#"SELECT p.id, p.slug, p.first_name, p.last_name, p.party, p.politician_type
               FROM politicians p
               JOIN politician_regions pr ON pr.politician_id = p.id
               WHERE p.politician_type = ? AND pr.region_id = ?
               ORDER BY p.last_name, p.first_name"#,
        )
        .bind(&campaign.politician_type)
        .bind(region.id)
        .fetch_all(&self.pool)
        .await?;

        let politicians = rows.iter().map(politician_from_row).collect();
        self.listings(campaign.id, politicians).await
    }

    async fn listings(
        &self,
        campaign_id: i64,
        mut politicians: Vec<Politician>,
    ) -> Result<Vec<PoliticianListing>, AppError> {
        self.attach_politician_regions(&mut politicians).await?;

        let mut wip: HashMap<i64, WipCount> = self
            .list_wip_counts(campaign_id)
            .await?
            .into_iter()
            .map(|w| (w.politician_id, w))
            .collect();

        Ok(politicians
            .into_iter()
            .map(|politician| PoliticianListing {
                wip: wip.remove(&politician.id),
                politician,
            })
            .collect())
    }

    async fn attach_politician_regions(
        &self,
        politicians: &mut [Politician],
    ) -> Result<(), AppError> {
        if politicians.is_empty() {
            return Ok(());
        }

        let rows = sqlx::query(
            r#"SELECT pr.politician_id, r.id, r.slug, r.name
               FROM politician_regions pr
               JOIN regions r ON r.id = pr.region_id
               ORDER BY r.slug"#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_politician: HashMap<i64, Vec<Region>> = HashMap::new();
        for row in &rows {
            by_politician
                .entry(row.get("politician_id"))
                .or_default()
                .push(region_from_row(row));
        }

        for politician in politicians.iter_mut() {
            politician.regions = by_politician.remove(&politician.id).unwrap_or_default();
        }
        Ok(())
    }

    // ==================== ARGUMENT OPERATIONS ====================

    /// List the arguments of a campaign.
    pub async fn list_arguments(&self, campaign_id: i64) -> Result<Vec<Argument>, AppError> {
        let rows = sqlx::query(
            "SELECT id, campaign_id, title, text FROM arguments WHERE campaign_id = ? ORDER BY id",
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(argument_from_row).collect())
    }

    /// Get an argument, only if it belongs to the campaign.
    pub async fn get_argument(
        &self,
        campaign_id: i64,
        id: i64,
    ) -> Result<Option<Argument>, AppError> {
        let row = sqlx::query(
            "SELECT id, campaign_id, title, text FROM arguments WHERE campaign_id = ? AND id = ?",
        )
        .bind(campaign_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(argument_from_row))
    }

    /// Add an argument to a campaign.
    pub async fn create_argument(
        &self,
        campaign_id: i64,
        request: &CreateArgumentRequest,
    ) -> Result<Argument, AppError> {
        let result = sqlx::query("INSERT INTO arguments (campaign_id, title, text) VALUES (?, ?, ?)")
            .bind(campaign_id)
            .bind(&request.title)
            .bind(&request.text)
            .execute(&self.pool)
            .await?;

        Ok(Argument {
            id: result.last_insert_rowid(),
            campaign_id,
            title: request.title.clone(),
            text: request.text.clone(),
        })
    }

    // ==================== PERSON OPERATIONS ====================

    /// Find the person holding a confirmation token.
    pub async fn find_person_by_token(&self, token: &str) -> Result<Option<Person>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM persons WHERE confirmation_token = ?",
            PERSON_COLUMNS
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(person_from_row))
    }

    /// Store a lobby submission: upsert the person by email, issue a token
    /// if needed, and find or create the campaign entry.
    pub async fn submit_entry(
        &self,
        submission: &Submission<'_>,
    ) -> Result<SubmissionOutcome, AppError> {
        let form = submission.form;
        let mut tx = self.pool.begin().await?;

        // The first statement writes, so the write lock is held before any read
        let person_id: i64 = sqlx::query(
            r#"INSERT INTO persons (email, first_name, last_name, city, confirmed, language, created_at)
               VALUES (?, ?, ?, ?, 0, ?, ?)
               ON CONFLICT (email) DO UPDATE SET
                 first_name = excluded.first_name,
                 last_name = excluded.last_name,
                 city = excluded.city,
                 language = excluded.language
               RETURNING id"#,
        )
        .bind(&form.email)
        .bind(&form.firstname)
        .bind(&form.lastname)
        .bind(form.city())
        .bind(submission.locale.as_str())
        .bind(submission.now)
        .fetch_one(&mut *tx)
        .await?
        .get("id");

        let mut person = sqlx::query(&format!("SELECT {} FROM persons WHERE id = ?", PERSON_COLUMNS))
            .bind(person_id)
            .fetch_one(&mut *tx)
            .await
            .map(|row| person_from_row(&row))?;

        if person.needs_token() {
            let expires = confirmation_expiry(submission.now);
            sqlx::query(
                "UPDATE persons SET confirmation_token = ?, confirmation_expires = ? WHERE id = ?",
            )
            .bind(&submission.token)
            .bind(expires)
            .bind(person_id)
            .execute(&mut *tx)
            .await?;
            person.confirmation_token = Some(submission.token.clone());
            person.confirmation_expires = Some(expires);
        }

        let inserted = sqlx::query(
            r#"INSERT INTO campaign_entries
               (person_id, campaign_id, politician_id, argument_id, opt_in_information, confirmed, color, created_at)
               VALUES (?, ?, ?, ?, ?, 0, ?, ?)
               ON CONFLICT (person_id, campaign_id, politician_id, argument_id) DO NOTHING"#,
        )
        .bind(person_id)
        .bind(submission.campaign_id)
        .bind(submission.politician_id)
        .bind(submission.argument_id)
        .bind(form.opted_in() as i32)
        .bind(&submission.color)
        .bind(submission.now)
        .execute(&mut *tx)
        .await?;
        let entry_created = inserted.rows_affected() == 1;

        let mut entry = sqlx::query(&format!(
            "SELECT {} FROM campaign_entries WHERE person_id = ? AND campaign_id = ? AND politician_id = ? AND argument_id = ?",
            ENTRY_COLUMNS
        ))
        .bind(person_id)
        .bind(submission.campaign_id)
        .bind(submission.politician_id)
        .bind(submission.argument_id)
        .fetch_one(&mut *tx)
        .await
        .map(|row| entry_from_row(&row))?;

        if person.confirmed && !entry.confirmed {
            sqlx::query("UPDATE campaign_entries SET confirmed = 1 WHERE id = ?")
                .bind(entry.id)
                .execute(&mut *tx)
                .await?;
            entry.confirmed = true;
        }

        tx.commit().await?;

        Ok(SubmissionOutcome {
            person,
            entry,
            entry_created,
        })
    }

    /// Confirm a person through their token and mark their entries for this
    /// campaign and politician confirmed. Returns the most recent entry.
    ///
    /// The token is consumed in the same statement that confirms the
    /// person, so it confirms at most once. Without a matching entry the
    /// transaction rolls back and the token stays valid.
    pub async fn confirm_person(
        &self,
        person: &Person,
        campaign_id: i64,
        politician_id: i64,
    ) -> Result<CampaignEntry, AppError> {
        let token = person
            .confirmation_token
            .as_deref()
            .ok_or(AppError::TokenNotFound)?;

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"UPDATE persons SET confirmed = 1, confirmation_token = NULL, confirmation_expires = NULL
               WHERE id = ? AND confirmation_token = ?"#,
        )
        .bind(person.id)
        .bind(token)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            // Token consumed concurrently
            return Err(AppError::TokenNotFound);
        }

        let latest = sqlx::query(&format!(
            "SELECT {} FROM campaign_entries WHERE person_id = ? AND campaign_id = ? AND politician_id = ? ORDER BY id DESC LIMIT 1",
            ENTRY_COLUMNS
        ))
        .bind(person.id)
        .bind(campaign_id)
        .bind(politician_id)
        .fetch_optional(&mut *tx)
        .await?
        .map(|row| entry_from_row(&row))
        .ok_or_else(|| AppError::NotFound("Could not find campaign entry".to_string()))?;

        sqlx::query(
            "UPDATE campaign_entries SET confirmed = 1 WHERE person_id = ? AND campaign_id = ? AND politician_id = ?",
        )
        .bind(person.id)
        .bind(campaign_id)
        .bind(politician_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(CampaignEntry {
            confirmed: true,
            ..latest
        })
    }

    // ==================== ENTRY OPERATIONS ====================

    /// Get an entry with display names, only if it belongs to the campaign.
    pub async fn get_entry_view(
        &self,
        campaign_id: i64,
        id: i64,
    ) -> Result<Option<EntryView>, AppError> {
        let row = sqlx::query(&format!(
            "{} WHERE e.campaign_id = ? AND e.id = ?",
            ENTRY_VIEW_SELECT
        ))
        .bind(campaign_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(entry_view_from_row))
    }

    /// The most recent entries of a campaign, newest first.
    pub async fn latest_entries(
        &self,
        campaign_id: i64,
        limit: i64,
    ) -> Result<Vec<EntryView>, AppError> {
        let rows = sqlx::query(&format!(
            "{} WHERE e.campaign_id = ? ORDER BY e.id DESC LIMIT ?",
            ENTRY_VIEW_SELECT
        ))
        .bind(campaign_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(entry_view_from_row).collect())
    }

    /// The most recent confirmed entries of a campaign, newest first.
    pub async fn confirmed_entries(
        &self,
        campaign_id: i64,
        limit: i64,
    ) -> Result<Vec<EntryView>, AppError> {
        let rows = sqlx::query(&format!(
            "{} WHERE e.campaign_id = ? AND e.confirmed = 1 ORDER BY e.id DESC LIMIT ?",
            ENTRY_VIEW_SELECT
        ))
        .bind(campaign_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(entry_view_from_row).collect())
    }

    /// Count all entries of a campaign.
    pub async fn count_entries(&self, campaign_id: i64) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM campaign_entries WHERE campaign_id = ?")
            .bind(campaign_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("total"))
    }

    /// Every entry of a campaign with contact details, oldest first.
    pub async fn export_entries(&self, campaign_id: i64) -> Result<Vec<EntryExport>, AppError> {
        let rows = sqlx::query(
            r#"SELECT e.id, e.argument_id, e.opt_in_information, e.confirmed, e.created_at,
                      pe.email, pe.first_name, pe.last_name, pe.city, pe.language,
                      po.slug AS politician_slug
               FROM campaign_entries e
               JOIN persons pe ON pe.id = e.person_id
               JOIN politicians po ON po.id = e.politician_id
               WHERE e.campaign_id = ?
               ORDER BY e.id"#,
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| {
                let opt_in: i32 = row.get("opt_in_information");
                let confirmed: i32 = row.get("confirmed");
                EntryExport {
                    id: row.get("id"),
                    email: row.get("email"),
                    first_name: row.get("first_name"),
                    last_name: row.get("last_name"),
                    city: row.get("city"),
                    language: row.get("language"),
                    politician_slug: row.get("politician_slug"),
                    argument_id: row.get("argument_id"),
                    opt_in_information: opt_in != 0,
                    confirmed: confirmed != 0,
                    created_at: row.get("created_at"),
                }
            })
            .collect())
    }

    // ==================== WIP COUNT OPERATIONS ====================

    /// List the counters of a campaign.
    pub async fn list_wip_counts(&self, campaign_id: i64) -> Result<Vec<WipCount>, AppError> {
        let rows = sqlx::query(
            "SELECT id, campaign_id, politician_id, status, voted FROM wip_counts WHERE campaign_id = ? ORDER BY politician_id",
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(wip_from_row).collect())
    }

    /// Set the counter of one politician within one campaign.
    pub async fn upsert_wip_count(
        &self,
        campaign_id: i64,
        politician_id: i64,
        status: i64,
        voted: Option<i64>,
    ) -> Result<WipCount, AppError> {
        let row = sqlx::query(
            r#"INSERT INTO wip_counts (campaign_id, politician_id, status, voted) VALUES (?, ?, ?, ?)
               ON CONFLICT (campaign_id, politician_id)
               DO UPDATE SET status = excluded.status, voted = excluded.voted
               RETURNING id, campaign_id, politician_id, status, voted"#,
        )
        .bind(campaign_id)
        .bind(politician_id)
        .bind(status)
        .bind(voted)
        .fetch_one(&self.pool)
        .await?;

        Ok(wip_from_row(&row))
    }
}

// Helper functions for row conversion

fn region_from_row(row: &sqlx::sqlite::SqliteRow) -> Region {
    Region {
        id: row.get("id"),
        slug: row.get("slug"),
        name: row.get("name"),
    }
}

fn campaign_from_row(row: &sqlx::sqlite::SqliteRow) -> Campaign {
    Campaign {
        id: row.get("id"),
        slug: row.get("slug"),
        name: row.get("name"),
        politician_type: row.get("politician_type"),
        regions: Vec::new(),
        created_at: row.get("created_at"),
    }
}

fn politician_from_row(row: &sqlx::sqlite::SqliteRow) -> Politician {
    Politician {
        id: row.get("id"),
        slug: row.get("slug"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        party: row.get("party"),
        politician_type: row.get("politician_type"),
        regions: Vec::new(),
    }
}

fn argument_from_row(row: &sqlx::sqlite::SqliteRow) -> Argument {
    Argument {
        id: row.get("id"),
        campaign_id: row.get("campaign_id"),
        title: row.get("title"),
        text: row.get("text"),
    }
}

fn person_from_row(row: &sqlx::sqlite::SqliteRow) -> Person {
    let confirmed: i32 = row.get("confirmed");
    Person {
        id: row.get("id"),
        email: row.get("email"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        city: row.get("city"),
        confirmation_token: row.get("confirmation_token"),
        confirmation_expires: row.get("confirmation_expires"),
        confirmed: confirmed != 0,
        language: row.get("language"),
        created_at: row.get("created_at"),
    }
}

fn entry_from_row(row: &sqlx::sqlite::SqliteRow) -> CampaignEntry {
    let opt_in: i32 = row.get("opt_in_information");
    let confirmed: i32 = row.get("confirmed");
    CampaignEntry {
        id: row.get("id"),
        person_id: row.get("person_id"),
        campaign_id: row.get("campaign_id"),
        politician_id: row.get("politician_id"),
        argument_id: row.get("argument_id"),
        opt_in_information: opt_in != 0,
        confirmed: confirmed != 0,
        color: row.get("color"),
        created_at: row.get("created_at"),
    }
}

fn entry_view_from_row(row: &sqlx::sqlite::SqliteRow) -> EntryView {
    let confirmed: i32 = row.get("confirmed");
    let politician_first: String = row.get("politician_first_name");
    let politician_last: String = row.get("politician_last_name");
    EntryView {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        city: row.get("city"),
        politician_slug: row.get("politician_slug"),
        politician_name: format!("{} {}", politician_first, politician_last),
        argument_id: row.get("argument_id"),
        argument_title: row.get("argument_title"),
        color: row.get("color"),
        confirmed: confirmed != 0,
        created_at: row.get("created_at"),
    }
}

fn wip_from_row(row: &sqlx::sqlite::SqliteRow) -> WipCount {
    WipCount {
        id: row.get("id"),
        campaign_id: row.get("campaign_id"),
        politician_id: row.get("politician_id"),
        status: row.get("status"),
        voted: row.get("voted"),
    }
}
