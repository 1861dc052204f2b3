//! In-process job posting repository.
//!
//! Backs the server when no database is configured (local development) and
//! gives handler tests a repository without a PostgreSQL instance. Postings
//! and authors live behind a single mutex; a poisoned lock surfaces as a
//! connection error rather than a panic.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{JobPostingRepository, JobPostingRepositoryError};
use crate::domain::posting::{AuthorName, JobPosting, PostingWithAuthor};

#[derive(Debug, Default)]
struct Inner {
    postings: HashMap<Uuid, JobPosting>,
    authors: HashMap<Uuid, AuthorName>,
}

/// Mutex-backed implementation of the job posting repository port.
#[derive(Debug, Default)]
pub struct MemoryJobPostingRepository {
    inner: Mutex<Inner>,
}

/// Placeholder name for postings whose author was never registered.
fn unknown_author() -> AuthorName {
    AuthorName {
        first_name: "Unknown".into(),
        last_name: "Author".into(),
    }
}

impl MemoryJobPostingRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an author's display name so listings can join it.
    ///
    /// # Errors
    ///
    /// Returns a connection error when the store's lock is poisoned.
    pub fn register_author(
        &self,
        id: Uuid,
        author: AuthorName,
    ) -> Result<(), JobPostingRepositoryError> {
        self.lock()?.authors.insert(id, author);
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, JobPostingRepositoryError> {
        self.inner
            .lock()
            .map_err(|_| JobPostingRepositoryError::connection("posting store lock poisoned"))
    }
}

/// Newest first, with the identifier as a tiebreak for equal timestamps.
fn sort_newest_first(postings: &mut [JobPosting]) {
    postings.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[async_trait]
impl JobPostingRepository for MemoryJobPostingRepository {
    async fn create(&self, posting: &JobPosting) -> Result<(), JobPostingRepositoryError> {
        self.lock()?.postings.insert(posting.id, posting.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<PostingWithAuthor>, JobPostingRepositoryError> {
        let inner = self.lock()?;
        Ok(inner.postings.get(&id).map(|posting| PostingWithAuthor {
            posting: posting.clone(),
            author: inner
                .authors
                .get(&posting.author_id)
                .cloned()
                .unwrap_or_else(unknown_author),
        }))
    }

    async fn find_owned(&self, id: Uuid) -> Result<Option<JobPosting>, JobPostingRepositoryError> {
        Ok(self.lock()?.postings.get(&id).cloned())
    }

    async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostingWithAuthor>, JobPostingRepositoryError> {
        let inner = self.lock()?;
        let mut postings: Vec<JobPosting> = inner.postings.values().cloned().collect();
        sort_newest_first(&mut postings);

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(postings
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|posting| {
                let author = inner
                    .authors
                    .get(&posting.author_id)
                    .cloned()
                    .unwrap_or_else(unknown_author);
                PostingWithAuthor { posting, author }
            })
            .collect())
    }

    async fn list_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<JobPosting>, JobPostingRepositoryError> {
        let inner = self.lock()?;
        let mut postings: Vec<JobPosting> = inner
            .postings
            .values()
            .filter(|posting| posting.author_id == author_id)
            .cloned()
            .collect();
        sort_newest_first(&mut postings);
        Ok(postings)
    }

    async fn count(&self) -> Result<i64, JobPostingRepositoryError> {
        let len = self.lock()?.postings.len();
        Ok(i64::try_from(len).unwrap_or(i64::MAX))
    }

    async fn update(&self, posting: &JobPosting) -> Result<(), JobPostingRepositoryError> {
        let mut inner = self.lock()?;
        match inner.postings.get_mut(&posting.id) {
            Some(slot) => {
                *slot = posting.clone();
                Ok(())
            }
            None => Err(JobPostingRepositoryError::not_found(posting.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), JobPostingRepositoryError> {
        let mut inner = self.lock()?;
        if inner.postings.remove(&id).is_none() {
            return Err(JobPostingRepositoryError::not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::posting::PostingForm;

    fn form(title: &str) -> PostingForm {
        PostingForm {
            job_title: title.into(),
            company_name: "Barton Springs Pool".into(),
            category: "Recreation".into(),
            employment_type: "Part-time".into(),
            job_description: r#"{"root":{"type":"root","children":[]}}"#.into(),
            salary_min: None,
            salary_max: Some(18),
            salary_type: "Per Hour".into(),
            part_of_town: None,
            work_presence: "In person".into(),
            company_website: String::new(),
            how_to_apply: "emailResume".into(),
            link_to_apply: String::new(),
            contact_email: "hiring@example.com".into(),
            contact_phone: String::new(),
            custom_instructions: String::new(),
        }
    }

    fn posting(title: &str, author_id: Uuid, age_days: i64) -> JobPosting {
        JobPosting::from_form(
            Uuid::new_v4(),
            author_id,
            Utc::now() - Duration::days(age_days),
            form(title),
        )
        .expect("fixture form is valid")
    }

    #[fixture]
    fn repo() -> MemoryJobPostingRepository {
        MemoryJobPostingRepository::new()
    }

    #[rstest]
    #[actix_rt::test]
    async fn create_then_find_round_trips(repo: MemoryJobPostingRepository) {
        let author_id = Uuid::new_v4();
        repo.register_author(
            author_id,
            AuthorName {
                first_name: "Rosa".into(),
                last_name: "Duarte".into(),
            },
        )
        .expect("register author");
        let posting = posting("Lifeguard", author_id, 0);

        repo.create(&posting).await.expect("create succeeds");
        let found = repo
            .find_by_id(posting.id)
            .await
            .expect("find succeeds")
            .expect("posting present");

        assert_eq!(found.posting, posting);
        assert_eq!(found.author.display(), "Rosa Duarte");
    }

    #[rstest]
    #[actix_rt::test]
    async fn unregistered_author_gets_placeholder_name(repo: MemoryJobPostingRepository) {
        let posting = posting("Lifeguard", Uuid::new_v4(), 0);
        repo.create(&posting).await.expect("create succeeds");

        let found = repo
            .find_by_id(posting.id)
            .await
            .expect("find succeeds")
            .expect("posting present");
        assert_eq!(found.author.display(), "Unknown Author");
    }

    #[rstest]
    #[actix_rt::test]
    async fn list_pages_newest_first(repo: MemoryJobPostingRepository) {
        let author_id = Uuid::new_v4();
        for (title, age) in [("Oldest", 3), ("Middle", 2), ("Newest", 1)] {
            repo.create(&posting(title, author_id, age))
                .await
                .expect("create succeeds");
        }

        let page = repo.list(2, 0).await.expect("list succeeds");
        let titles: Vec<&str> = page
            .iter()
            .map(|entry| entry.posting.job_title.as_str())
            .collect();
        assert_eq!(titles, ["Newest", "Middle"]);

        let rest = repo.list(2, 2).await.expect("list succeeds");
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].posting.job_title, "Oldest");
        assert_eq!(repo.count().await.expect("count succeeds"), 3);
    }

    #[rstest]
    #[actix_rt::test]
    async fn list_by_author_filters_other_authors(repo: MemoryJobPostingRepository) {
        let mine = Uuid::new_v4();
        let theirs = Uuid::new_v4();
        repo.create(&posting("Mine", mine, 1))
            .await
            .expect("create succeeds");
        repo.create(&posting("Theirs", theirs, 2))
            .await
            .expect("create succeeds");

        let owned = repo.list_by_author(mine).await.expect("list succeeds");
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].job_title, "Mine");
    }

    #[rstest]
    #[actix_rt::test]
    async fn update_missing_posting_reports_not_found(repo: MemoryJobPostingRepository) {
        let posting = posting("Ghost", Uuid::new_v4(), 0);

        let error = repo
            .update(&posting)
            .await
            .expect_err("missing posting should fail");
        assert_eq!(error, JobPostingRepositoryError::not_found(posting.id));
    }

    #[rstest]
    #[actix_rt::test]
    async fn delete_removes_posting(repo: MemoryJobPostingRepository) {
        let posting = posting("Short lived", Uuid::new_v4(), 0);
        repo.create(&posting).await.expect("create succeeds");

        repo.delete(posting.id).await.expect("delete succeeds");
        assert!(
            repo.find_owned(posting.id)
                .await
                .expect("find succeeds")
                .is_none()
        );
        let error = repo
            .delete(posting.id)
            .await
            .expect_err("second delete should fail");
        assert_eq!(error, JobPostingRepositoryError::not_found(posting.id));
    }
}
