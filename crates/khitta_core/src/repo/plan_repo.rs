//! Plan store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide upsert/get/list APIs over the `lesson_plans` table.
//! - Derive the teacher profile from the most recently saved plan.
//!
//! # Invariants
//! - `upsert_plan` replaces an existing row with the same uuid, else appends.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::plan::{LessonRecord, Objective, PlanId};
use crate::model::profile::TeacherProfile;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const PLAN_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    subject,
    grade,
    education_area,
    school_name,
    teacher_name,
    emblem_right,
    emblem_left,
    date,
    day,
    methods,
    aids,
    introduction,
    closure,
    cognitive,
    psychomotor,
    affective
FROM lesson_plans";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for plan persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    /// The connection was opened without running migrations.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted plan data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open connections through db::open_db"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable keyed plan-store contract.
pub trait PlanRepository {
    /// Inserts the record, or replaces the stored row with the same id.
    fn upsert_plan(&self, plan: &LessonRecord) -> RepoResult<()>;
    fn get_plan(&self, id: PlanId) -> RepoResult<Option<LessonRecord>>;
    /// Lists all plans, most recently saved first.
    fn list_plans(&self) -> RepoResult<Vec<LessonRecord>>;
    /// Returns the prefill profile from the most recently saved plan.
    fn latest_profile(&self) -> RepoResult<Option<TeacherProfile>>;
}

/// SQLite-backed plan repository.
#[derive(Debug)]
pub struct SqlitePlanRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePlanRepository<'conn> {
    /// Wraps a connection after verifying its schema was migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl PlanRepository for SqlitePlanRepository<'_> {
    fn upsert_plan(&self, plan: &LessonRecord) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO lesson_plans (
                uuid, title, subject, grade, education_area, school_name,
                teacher_name, emblem_right, emblem_left, date, day,
                methods, aids, introduction, closure,
                cognitive, psychomotor, affective
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
            ON CONFLICT(uuid) DO UPDATE SET
                title = excluded.title,
                subject = excluded.subject,
                grade = excluded.grade,
                education_area = excluded.education_area,
                school_name = excluded.school_name,
                teacher_name = excluded.teacher_name,
                emblem_right = excluded.emblem_right,
                emblem_left = excluded.emblem_left,
                date = excluded.date,
                day = excluded.day,
                methods = excluded.methods,
                aids = excluded.aids,
                introduction = excluded.introduction,
                closure = excluded.closure,
                cognitive = excluded.cognitive,
                psychomotor = excluded.psychomotor,
                affective = excluded.affective,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                plan.uuid.to_string(),
                plan.title.as_str(),
                plan.subject.as_str(),
                plan.grade.as_str(),
                plan.education_area.as_str(),
                plan.school_name.as_str(),
                plan.teacher_name.as_str(),
                plan.emblem_right.as_str(),
                plan.emblem_left.as_str(),
                plan.date.as_str(),
                plan.day.as_str(),
                texts_to_json(&plan.methods)?,
                texts_to_json(&plan.aids)?,
                plan.introduction.as_str(),
                plan.closure.as_str(),
                objectives_to_json(&plan.cognitive)?,
                objectives_to_json(&plan.psychomotor)?,
                objectives_to_json(&plan.affective)?,
            ],
        )?;

        Ok(())
    }

    fn get_plan(&self, id: PlanId) -> RepoResult<Option<LessonRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PLAN_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_plan_row(row)?));
        }

        Ok(None)
    }

    fn list_plans(&self) -> RepoResult<Vec<LessonRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PLAN_SELECT_SQL} ORDER BY updated_at DESC, uuid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut plans = Vec::new();
        while let Some(row) = rows.next()? {
            plans.push(parse_plan_row(row)?);
        }

        Ok(plans)
    }

    fn latest_profile(&self) -> RepoResult<Option<TeacherProfile>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PLAN_SELECT_SQL} ORDER BY updated_at DESC, uuid ASC LIMIT 1;"
        ))?;

        let mut rows = stmt.query([])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_plan_row(row)?.profile()));
        }

        Ok(None)
    }
}

fn parse_plan_row(row: &Row<'_>) -> RepoResult<LessonRecord> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in lesson_plans.uuid"))
    })?;

    Ok(LessonRecord {
        uuid,
        title: row.get("title")?,
        subject: row.get("subject")?,
        grade: row.get("grade")?,
        education_area: row.get("education_area")?,
        school_name: row.get("school_name")?,
        teacher_name: row.get("teacher_name")?,
        emblem_right: row.get("emblem_right")?,
        emblem_left: row.get("emblem_left")?,
        date: row.get("date")?,
        day: row.get("day")?,
        methods: texts_from_json("methods", &row.get::<_, String>("methods")?)?,
        aids: texts_from_json("aids", &row.get::<_, String>("aids")?)?,
        introduction: row.get("introduction")?,
        closure: row.get("closure")?,
        cognitive: objectives_from_json("cognitive", &row.get::<_, String>("cognitive")?)?,
        psychomotor: objectives_from_json("psychomotor", &row.get::<_, String>("psychomotor")?)?,
        affective: objectives_from_json("affective", &row.get::<_, String>("affective")?)?,
    })
}

fn texts_to_json(values: &[String]) -> RepoResult<String> {
    serde_json::to_string(values)
        .map_err(|err| RepoError::InvalidData(format!("unserializable text list: {err}")))
}

fn texts_from_json(column: &str, raw: &str) -> RepoResult<Vec<String>> {
    serde_json::from_str(raw).map_err(|err| {
        RepoError::InvalidData(format!("invalid JSON in lesson_plans.{column}: {err}"))
    })
}

fn objectives_to_json(values: &[Objective]) -> RepoResult<String> {
    serde_json::to_string(values)
        .map_err(|err| RepoError::InvalidData(format!("unserializable objective list: {err}")))
}

fn objectives_from_json(column: &str, raw: &str) -> RepoResult<Vec<Objective>> {
    serde_json::from_str(raw).map_err(|err| {
        RepoError::InvalidData(format!("invalid JSON in lesson_plans.{column}: {err}"))
    })
}
