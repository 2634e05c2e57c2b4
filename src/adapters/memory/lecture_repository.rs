//! In-memory lecture repository with compare-and-set semantics.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, LectureId, LectureStatus, Timestamp};
use crate::domain::lecture::Lecture;
use crate::ports::LectureRepository;

/// Map-backed repository.
///
/// The compare-and-set runs under the single write lock, which gives the
/// same guarantee an optimistic version check gives against a database: two
/// racing swaps from the same expected status cannot both succeed.
pub struct InMemoryLectureRepository {
    lectures: RwLock<HashMap<LectureId, Lecture>>,
}

impl InMemoryLectureRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            lectures: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryLectureRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LectureRepository for InMemoryLectureRepository {
    async fn get(&self, id: &LectureId) -> Result<Option<Lecture>, DomainError> {
        Ok(self.lectures.read().await.get(id).cloned())
    }

    async fn exists(&self, id: &LectureId) -> Result<bool, DomainError> {
        Ok(self.lectures.read().await.contains_key(id))
    }

    async fn insert(&self, lecture: &Lecture) -> Result<(), DomainError> {
        self.lectures
            .write()
            .await
            .insert(lecture.id, lecture.clone());
        Ok(())
    }

    async fn compare_and_set_status(
        &self,
        id: &LectureId,
        expected: LectureStatus,
        next: LectureStatus,
    ) -> Result<bool, DomainError> {
        let mut lectures = self.lectures.write().await;
        match lectures.get_mut(id) {
            Some(lecture) if lecture.status == expected => {
                lecture.status = next;
                lecture.updated_at = Timestamp::now();
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::sync::Arc;

    fn lecture_in(status: LectureStatus) -> Lecture {
        let mut lecture = Lecture::new(UserId::new("user-1").unwrap(), "Lecture");
        lecture.apply_status(status);
        lecture
    }

    #[tokio::test]
    async fn get_returns_inserted_lecture() {
        let repo = InMemoryLectureRepository::new();
        let lecture = lecture_in(LectureStatus::SlideUpload);

        repo.insert(&lecture).await.unwrap();

        let stored = repo.get(&lecture.id).await.unwrap().unwrap();
        assert_eq!(stored, lecture);
        assert!(repo.exists(&lecture.id).await.unwrap());
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_id() {
        let repo = InMemoryLectureRepository::new();
        assert!(repo.get(&LectureId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn cas_succeeds_when_expected_matches() {
        let repo = InMemoryLectureRepository::new();
        let lecture = lecture_in(LectureStatus::SlideUpload);
        repo.insert(&lecture).await.unwrap();

        let swapped = repo
            .compare_and_set_status(&lecture.id, LectureStatus::SlideUpload, LectureStatus::Recording)
            .await
            .unwrap();

        assert!(swapped);
        let stored = repo.get(&lecture.id).await.unwrap().unwrap();
        assert_eq!(stored.status, LectureStatus::Recording);
    }

    #[tokio::test]
    async fn cas_fails_when_status_moved_on() {
        let repo = InMemoryLectureRepository::new();
        let lecture = lecture_in(LectureStatus::Recording);
        repo.insert(&lecture).await.unwrap();

        let swapped = repo
            .compare_and_set_status(&lecture.id, LectureStatus::SlideUpload, LectureStatus::Recording)
            .await
            .unwrap();

        assert!(!swapped);
        let stored = repo.get(&lecture.id).await.unwrap().unwrap();
        assert_eq!(stored.status, LectureStatus::Recording);
    }

    #[tokio::test]
    async fn cas_fails_for_unknown_lecture() {
        let repo = InMemoryLectureRepository::new();
        let swapped = repo
            .compare_and_set_status(
                &LectureId::new(),
                LectureStatus::SlideUpload,
                LectureStatus::Recording,
            )
            .await
            .unwrap();
        assert!(!swapped);
    }

    #[tokio::test]
    async fn racing_swaps_from_same_expected_have_one_winner() {
        let repo = Arc::new(InMemoryLectureRepository::new());
        let lecture = lecture_in(LectureStatus::Analyzing);
        repo.insert(&lecture).await.unwrap();

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let repo = repo.clone();
            let id = lecture.id;
            tasks.push(tokio::spawn(async move {
                repo.compare_and_set_status(&id, LectureStatus::Analyzing, LectureStatus::Completed)
                    .await
                    .unwrap()
            }));
        }

        let mut winners = 0;
        for task in tasks {
            if task.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
    }
}
