use crate::application::ports::notifier::UpvoteNotifier;
use crate::application::ports::repositories::UpvoteRepository;
use crate::domain::entities::{UpvoteRecord, User};
use crate::domain::value_objects::{UpvoteUpdate, UpvoteView};
use crate::shared::error::AppError;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// 投稿単位のアップボートトグルを担うサービス。
///
/// トグル 1 回の流れ:
/// 1. 呼び出し時点の表示状態から楽観値を計算し、リモート呼び出しの前に通知する
/// 2. マーカー書き込み → カウンタ増減の順でストアを変異させる（アトミック性なし）
/// 3. 成功したら authoritative read でカウンタを読み直し、Reconciled で確定する
/// 4. どこかで失敗したらトグル前の値へ巻き戻し、RolledBack を通知して
///    エラーを返す（復旧可能、再実行でリトライ）
pub struct UpvoteService {
    upvotes: Arc<dyn UpvoteRepository>,
    notifier: Arc<dyn UpvoteNotifier>,
    /// トグル実行中の投稿 ID。二重送信をここで弾く。
    in_flight: Mutex<HashSet<String>>,
}

impl UpvoteService {
    pub fn new(upvotes: Arc<dyn UpvoteRepository>, notifier: Arc<dyn UpvoteNotifier>) -> Self {
        Self {
            upvotes,
            notifier,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    fn lock_in_flight(&self) -> MutexGuard<'_, HashSet<String>> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self, post_id: &str) -> Result<(), AppError> {
        let mut in_flight = self.lock_in_flight();
        if !in_flight.insert(post_id.to_string()) {
            return Err(AppError::InvalidInput(format!(
                "upvote toggle already in flight for post {post_id}"
            )));
        }
        Ok(())
    }

    fn finish(&self, post_id: &str) {
        self.lock_in_flight().remove(post_id);
    }

    /// 通知の失敗でトグル自体を落とさない
    async fn push(&self, post_id: &str, update: UpvoteUpdate) {
        if let Err(err) = self.notifier.notify(post_id, &update).await {
            warn!("Failed to push upvote update for {post_id}: {err}");
        }
    }

    /// マウント時の表示状態。「投票済みか」は自分のマーカーの有無のみで決める。
    pub async fn upvote_view(
        &self,
        post_id: &str,
        viewer: Option<&User>,
    ) -> Result<UpvoteView, AppError> {
        let has_upvoted = match viewer {
            Some(user) => self.upvotes.has_upvote(post_id, &user.id).await?,
            None => false,
        };
        let count = self.read_count(post_id).await?;
        Ok(UpvoteView::new(has_upvoted, count))
    }

    /// トグル本体。`view` は呼び出し側が表示中の (has_upvoted, count)。
    pub async fn toggle_upvote(
        &self,
        post_id: &str,
        view: UpvoteView,
        viewer: Option<&User>,
    ) -> Result<UpvoteUpdate, AppError> {
        let Some(user) = viewer else {
            return Err(AppError::Unauthenticated(
                "login required to upvote".to_string(),
            ));
        };

        self.begin(post_id)?;
        let result = self.run_toggle(post_id, view, user).await;
        self.finish(post_id);
        result
    }

    async fn run_toggle(
        &self,
        post_id: &str,
        prior: UpvoteView,
        user: &User,
    ) -> Result<UpvoteUpdate, AppError> {
        let target = if prior.has_upvoted {
            UpvoteView::new(false, prior.count.saturating_sub(1))
        } else {
            UpvoteView::new(true, prior.count + 1)
        };

        // 楽観値はリモートに触る前に届ける
        self.push(post_id, UpvoteUpdate::Optimistic(target)).await;

        let mutation = if prior.has_upvoted {
            self.remove_upvote(post_id, &user.id).await
        } else {
            self.apply_upvote(post_id, &user.id).await
        };

        if let Err(err) = mutation {
            // トグル前の値へ厳密に巻き戻す
            self.push(post_id, UpvoteUpdate::RolledBack(prior)).await;
            return Err(err);
        }

        // authoritative read で楽観値を上書きする。並行して投票した他人の分もここで拾う。
        let count = match self.read_count(post_id).await {
            Ok(count) => count,
            Err(err) => {
                // 変異自体は成功しているので巻き戻さず、楽観値のまま確定する
                warn!("Authoritative re-read failed for {post_id}: {err}");
                target.count
            }
        };

        let reconciled = UpvoteUpdate::Reconciled(UpvoteView::new(target.has_upvoted, count));
        self.push(post_id, reconciled).await;
        Ok(reconciled)
    }

    /// マーカー書き込みが先、カウンタ増加が後。両者の間に原子性はない。
    async fn apply_upvote(&self, post_id: &str, user_id: &str) -> Result<(), AppError> {
        let record = UpvoteRecord::new(user_id.to_string());
        self.upvotes.set_upvote(post_id, &record).await?;
        self.upvotes.increment_count(post_id, 1).await?;
        Ok(())
    }

    async fn remove_upvote(&self, post_id: &str, user_id: &str) -> Result<(), AppError> {
        // 自分のマーカーが無ければ何もしない
        if !self.upvotes.has_upvote(post_id, user_id).await? {
            debug!("No upvote record for ({post_id}, {user_id}), nothing to remove");
            return Ok(());
        }

        // カウンタが既に 0 ならマーカー削除だけで済ませる（床は 0）
        let current = match self.upvotes.get_count(post_id).await {
            Ok(count) => count,
            Err(AppError::NotFound(_)) => return Ok(()),
            Err(err) => return Err(err),
        };

        self.upvotes.delete_upvote(post_id, user_id).await?;
        if current > 0 {
            self.upvotes.increment_count(post_id, -1).await?;
        }
        Ok(())
    }

    async fn read_count(&self, post_id: &str) -> Result<u32, AppError> {
        match self.upvotes.get_count(post_id).await {
            Ok(count) => Ok(count),
            // 投稿が消えていたら 0 扱い
            Err(AppError::NotFound(_)) => Ok(0),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};

    mock! {
        pub UpvoteRepo {}

        #[async_trait]
        impl UpvoteRepository for UpvoteRepo {
            async fn set_upvote(&self, post_id: &str, record: &UpvoteRecord) -> Result<(), AppError>;
            async fn delete_upvote(&self, post_id: &str, user_id: &str) -> Result<(), AppError>;
            async fn has_upvote(&self, post_id: &str, user_id: &str) -> Result<bool, AppError>;
            async fn increment_count(&self, post_id: &str, delta: i64) -> Result<(), AppError>;
            async fn get_count(&self, post_id: &str) -> Result<u32, AppError>;
        }
    }

    /// 通知を順番どおり記録するだけのフェイク
    struct RecordingNotifier {
        updates: Mutex<Vec<UpvoteUpdate>>,
    }

    impl RecordingNotifier {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                updates: Mutex::new(Vec::new()),
            })
        }

        fn updates(&self) -> Vec<UpvoteUpdate> {
            self.updates.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UpvoteNotifier for RecordingNotifier {
        async fn notify(&self, _post_id: &str, update: &UpvoteUpdate) -> Result<(), AppError> {
            self.updates.lock().unwrap().push(*update);
            Ok(())
        }
    }

    fn viewer() -> User {
        User::new("u1".into(), "Mika".into(), "mika@example.com".into())
    }

    fn service(repo: MockUpvoteRepo) -> (UpvoteService, Arc<RecordingNotifier>) {
        let notifier = RecordingNotifier::new();
        let service = UpvoteService::new(Arc::new(repo), notifier.clone());
        (service, notifier)
    }

    #[tokio::test]
    async fn toggle_without_identity_is_rejected_before_any_remote_call() {
        let repo = MockUpvoteRepo::new();
        let (service, notifier) = service(repo);

        let result = service
            .toggle_upvote("p1", UpvoteView::new(false, 3), None)
            .await;

        assert!(matches!(result, Err(AppError::Unauthenticated(_))));
        assert!(notifier.updates().is_empty());
    }

    #[tokio::test]
    async fn upvote_writes_record_then_increments_then_reconciles() {
        let mut repo = MockUpvoteRepo::new();
        repo.expect_set_upvote()
            .withf(|post_id, record| post_id == "p1" && record.user_id == "u1")
            .times(1)
            .returning(|_, _| Ok(()));
        repo.expect_increment_count()
            .with(eq("p1"), eq(1))
            .times(1)
            .returning(|_, _| Ok(()));
        // 並行した他人の投票で、楽観値 4 より大きい 6 が返ってくるケース
        repo.expect_get_count()
            .with(eq("p1"))
            .times(1)
            .returning(|_| Ok(6));

        let (service, notifier) = service(repo);
        let result = service
            .toggle_upvote("p1", UpvoteView::new(false, 3), Some(&viewer()))
            .await
            .expect("toggle should succeed");

        assert_eq!(
            result,
            UpvoteUpdate::Reconciled(UpvoteView::new(true, 6))
        );
        assert_eq!(
            notifier.updates(),
            vec![
                UpvoteUpdate::Optimistic(UpvoteView::new(true, 4)),
                UpvoteUpdate::Reconciled(UpvoteView::new(true, 6)),
            ]
        );
    }

    #[tokio::test]
    async fn un_upvote_at_floor_deletes_record_without_decrement() {
        let mut repo = MockUpvoteRepo::new();
        repo.expect_has_upvote()
            .with(eq("p1"), eq("u1"))
            .times(1)
            .returning(|_, _| Ok(true));
        // remove_upvote の床チェックと authoritative read の 2 回
        repo.expect_get_count()
            .with(eq("p1"))
            .times(2)
            .returning(|_| Ok(0));
        repo.expect_delete_upvote()
            .with(eq("p1"), eq("u1"))
            .times(1)
            .returning(|_, _| Ok(()));
        repo.expect_increment_count().times(0);

        let (service, _notifier) = service(repo);
        let result = service
            .toggle_upvote("p1", UpvoteView::new(true, 0), Some(&viewer()))
            .await
            .expect("toggle should succeed");

        assert_eq!(
            result,
            UpvoteUpdate::Reconciled(UpvoteView::new(false, 0))
        );
    }

    #[tokio::test]
    async fn un_upvote_without_record_is_a_no_op() {
        let mut repo = MockUpvoteRepo::new();
        repo.expect_has_upvote()
            .with(eq("p1"), eq("u1"))
            .times(1)
            .returning(|_, _| Ok(false));
        repo.expect_delete_upvote().times(0);
        repo.expect_increment_count().times(0);
        // authoritative read のみ
        repo.expect_get_count()
            .with(eq("p1"))
            .times(1)
            .returning(|_| Ok(0));

        let (service, _notifier) = service(repo);
        let result = service
            .toggle_upvote("p1", UpvoteView::new(true, 0), Some(&viewer()))
            .await
            .expect("toggle should succeed");

        assert_eq!(
            result,
            UpvoteUpdate::Reconciled(UpvoteView::new(false, 0))
        );
    }

    #[tokio::test]
    async fn failed_increment_rolls_back_to_prior_view() {
        let mut repo = MockUpvoteRepo::new();
        repo.expect_set_upvote().times(1).returning(|_, _| Ok(()));
        repo.expect_increment_count()
            .times(1)
            .returning(|_, _| Err(AppError::Network("connection reset".into())));
        repo.expect_get_count().times(0);

        let (service, notifier) = service(repo);
        let result = service
            .toggle_upvote("p1", UpvoteView::new(false, 3), Some(&viewer()))
            .await;

        assert!(matches!(result, Err(AppError::Network(_))));
        assert_eq!(
            notifier.updates(),
            vec![
                UpvoteUpdate::Optimistic(UpvoteView::new(true, 4)),
                UpvoteUpdate::RolledBack(UpvoteView::new(false, 3)),
            ]
        );
    }

    #[tokio::test]
    async fn missing_post_reconciles_to_zero() {
        let mut repo = MockUpvoteRepo::new();
        repo.expect_set_upvote().times(1).returning(|_, _| Ok(()));
        repo.expect_increment_count()
            .times(1)
            .returning(|_, _| Ok(()));
        repo.expect_get_count()
            .times(1)
            .returning(|_| Err(AppError::NotFound("post gone".into())));

        let (service, _notifier) = service(repo);
        let result = service
            .toggle_upvote("p1", UpvoteView::new(false, 3), Some(&viewer()))
            .await
            .expect("toggle should succeed");

        assert_eq!(result.view().count, 0);
    }

    #[tokio::test]
    async fn upvote_view_derives_state_from_own_record_only() {
        let mut repo = MockUpvoteRepo::new();
        repo.expect_has_upvote()
            .with(eq("p1"), eq("u1"))
            .times(1)
            .returning(|_, _| Ok(false));
        // カウンタが正でも、自分のマーカーが無ければ未投票
        repo.expect_get_count().times(1).returning(|_| Ok(12));

        let (service, _notifier) = service(repo);
        let view = service
            .upvote_view("p1", Some(&viewer()))
            .await
            .expect("view should load");

        assert_eq!(view, UpvoteView::new(false, 12));
    }
}
