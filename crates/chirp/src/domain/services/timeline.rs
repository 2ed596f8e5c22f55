//! Timeline Aggregation
//!
//! Builds a user's timeline at read time by visiting every followed
//! account (fan-out on read). Cost is O(followed users x tweets each);
//! nothing is cached or pre-materialized.

use uuid::Uuid;

use crate::domain::{errors::DomainError, Tweet};
use crate::ports::UserRepository;

/// Concatenate the tweets of every account `user_id` follows.
///
/// Order is follow order, then creation order within one author. There is
/// no chronological merge across authors. The first failed lookup aborts
/// the whole aggregation. The user's own tweets are never part of the
/// result, even when a self-follow edge exists.
pub async fn aggregate_timeline<R>(repo: &R, user_id: Uuid) -> Result<Vec<Tweet>, DomainError>
where
    R: UserRepository + ?Sized,
{
    let followed_ids = repo.get_followed_ids(user_id).await?;
    let mut timeline = Vec::new();

    for followed_id in followed_ids.into_iter().filter(|id| *id != user_id) {
        let tweets = repo.get_tweets_by_author(followed_id).await?;
        timeline.extend(tweets);
    }

    tracing::debug!(
        user_id = %user_id,
        tweets = timeline.len(),
        "Aggregated timeline"
    );

    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewTweet, TweetMessage, User};
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};

    /// Read-only fake: users are wired up front, `broken` authors fail
    #[derive(Default)]
    struct FakeRepo {
        users: HashMap<Uuid, User>,
        broken: HashSet<Uuid>,
    }

    impl FakeRepo {
        fn add_user(&mut self, name: &str) -> Uuid {
            let user = User::new(name.to_string(), format!("{}@x.com", name));
            let id = user.id;
            self.users.insert(id, user);
            id
        }

        fn wire_follow(&mut self, follower: Uuid, followed: Uuid) {
            self.users.get_mut(&follower).unwrap().add_following(followed);
            self.users.get_mut(&followed).unwrap().add_follower(follower);
        }

        fn post(&mut self, author: Uuid, message: &str) -> Tweet {
            let tweet =
                NewTweet::new(author, TweetMessage::parse(message).unwrap()).into_tweet();
            self.users.get_mut(&author).unwrap().tweets.push(tweet.clone());
            tweet
        }

        fn lookup(&self, id: Uuid) -> Result<&User, DomainError> {
            self.users
                .get(&id)
                .ok_or_else(|| DomainError::user_not_found(id))
        }
    }

    #[async_trait]
    impl UserRepository for FakeRepo {
        async fn create_user(&self, _name: &str, _email: &str) -> Result<User, DomainError> {
            unimplemented!("not used by aggregation")
        }

        async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
            self.lookup(id).cloned()
        }

        async fn follow(&self, _follower: Uuid, _followed: Uuid) -> Result<(), DomainError> {
            unimplemented!("not used by aggregation")
        }

        async fn get_followed_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
            Ok(self.lookup(user_id)?.following.clone())
        }

        async fn get_follower_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
            Ok(self.lookup(user_id)?.followers.clone())
        }

        async fn get_tweets_by_author(&self, user_id: Uuid) -> Result<Vec<Tweet>, DomainError> {
            if self.broken.contains(&user_id) {
                return Err(DomainError::Storage("disk on fire".to_string()));
            }
            Ok(self.lookup(user_id)?.tweets.clone())
        }
    }

    #[tokio::test]
    async fn test_concatenates_in_follow_order() {
        let mut repo = FakeRepo::default();
        let reader = repo.add_user("reader");
        let carol = repo.add_user("carol");
        let bob = repo.add_user("bob");
        let stranger = repo.add_user("stranger");

        // Bob posts first but is followed second
        let b1 = repo.post(bob, "bob one");
        let c1 = repo.post(carol, "carol one");
        let b2 = repo.post(bob, "bob two");
        let c2 = repo.post(carol, "carol two");
        repo.post(reader, "my own");
        repo.post(stranger, "not followed");

        repo.wire_follow(reader, carol);
        repo.wire_follow(reader, bob);

        let timeline = aggregate_timeline(&repo, reader).await.unwrap();

        assert_eq!(timeline, vec![c1, c2, b1, b2]);
    }

    #[tokio::test]
    async fn test_no_follows_is_empty() {
        let mut repo = FakeRepo::default();
        let loner = repo.add_user("loner");
        repo.post(loner, "talking to myself");

        let timeline = aggregate_timeline(&repo, loner).await.unwrap();

        assert!(timeline.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let repo = FakeRepo::default();

        let err = aggregate_timeline(&repo, Uuid::new_v4()).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_self_follow_does_not_include_own_tweets() {
        let mut repo = FakeRepo::default();
        let narcissus = repo.add_user("narcissus");
        let echo = repo.add_user("echo");
        repo.post(narcissus, "me");
        let e1 = repo.post(echo, "me too");

        repo.wire_follow(narcissus, narcissus);
        repo.wire_follow(narcissus, echo);

        let timeline = aggregate_timeline(&repo, narcissus).await.unwrap();

        assert_eq!(timeline, vec![e1]);
    }

    #[tokio::test]
    async fn test_fails_fast_on_broken_followed_user() {
        let mut repo = FakeRepo::default();
        let reader = repo.add_user("reader");
        let healthy = repo.add_user("healthy");
        let broken = repo.add_user("broken");
        repo.post(healthy, "fine");
        repo.wire_follow(reader, healthy);
        repo.wire_follow(reader, broken);
        repo.broken.insert(broken);

        let err = aggregate_timeline(&repo, reader).await.unwrap_err();

        assert_eq!(err, DomainError::Storage("disk on fire".to_string()));
    }

    #[tokio::test]
    async fn test_dangling_followed_id_fails_whole_timeline() {
        let mut repo = FakeRepo::default();
        let reader = repo.add_user("reader");
        let ghost = Uuid::new_v4();
        repo.users.get_mut(&reader).unwrap().add_following(ghost);

        let err = aggregate_timeline(&repo, reader).await.unwrap_err();

        assert_eq!(err, DomainError::user_not_found(ghost));
    }

    #[tokio::test]
    async fn test_timeline_has_no_duplicate_tweets() {
        let mut repo = FakeRepo::default();
        let reader = repo.add_user("reader");
        let mut authors = Vec::new();
        for i in 0..5 {
            let author = repo.add_user(&format!("author{}", i));
            for j in 0..3 {
                repo.post(author, &format!("post {} from {}", j, i));
            }
            authors.push(author);
        }
        for author in &authors {
            repo.wire_follow(reader, *author);
            // repeated follow must not duplicate the author's tweets
            repo.wire_follow(reader, *author);
        }

        let timeline = aggregate_timeline(&repo, reader).await.unwrap();
        let unique: HashSet<Uuid> = timeline.iter().map(|t| t.id).collect();

        assert_eq!(timeline.len(), 15);
        assert_eq!(unique.len(), timeline.len());
        assert!(timeline.iter().all(|t| t.user_id != reader));
    }

    #[tokio::test]
    async fn test_provided_get_timeline_uses_aggregation() {
        let mut repo = FakeRepo::default();
        let alice = repo.add_user("alice");
        let bob = repo.add_user("bob");
        let hi = repo.post(bob, "hi there");
        repo.wire_follow(alice, bob);

        assert_eq!(repo.get_timeline(alice).await.unwrap(), vec![hi]);
        assert!(repo.get_timeline(bob).await.unwrap().is_empty());
    }
}
