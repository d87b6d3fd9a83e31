//! Service contract tests
//!
//! Exercises the role-gated CRUD surface end to end against the in-memory
//! repository: authorization precedence, identifier handling, partial
//! update semantics, and the dual delete policy (repository tolerant,
//! handler strict).

use std::sync::Arc;

use async_trait::async_trait;

use core_kernel::{DomainPort, GameId, Page, PageRequest, PortError};
use domain_game::{Game, GameError, GameInput, GameRepository, GameService, InMemoryGameRepository};
use test_utils::{admin, reader, seeded_repository, GameBuilder};

fn service(repo: InMemoryGameRepository) -> GameService {
    GameService::new(Arc::new(repo))
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn empty_repository_first_page_is_empty_with_zero_total() {
        let service = service(InMemoryGameRepository::new());
        let page = service
            .list(&reader(), PageRequest::new(1, 10))
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn list_requires_no_role() {
        let service = service(seeded_repository(3).await);
        let page = service
            .list(&reader(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn total_is_stable_across_page_boundaries() {
        let service = service(seeded_repository(23).await);

        let mut seen = 0;
        for page_no in 1..=3 {
            let page = service
                .list(&reader(), PageRequest::new(page_no, 10))
                .await
                .unwrap();
            assert_eq!(page.total, 23);
            seen += page.items.len();
        }
        assert_eq!(seen, 23);
    }

    #[tokio::test]
    async fn non_positive_page_is_normalized_to_first() {
        let service = service(seeded_repository(5).await);
        let page = service
            .list(&reader(), PageRequest::new(0, 10))
            .await
            .unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 5);
    }
}

mod fetching {
    use super::*;

    #[tokio::test]
    async fn get_returns_created_record() {
        let service = service(InMemoryGameRepository::new());
        let created = service
            .create(&admin(), GameInput::titled("Catan"))
            .await
            .unwrap();

        let fetched = service
            .get(&reader(), &created.id.to_string())
            .await
            .unwrap();
        assert_eq!(fetched.title, "Catan");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn get_empty_id_is_not_found_without_repository_call() {
        // The repository stays empty; an empty id must short-circuit before
        // any lookup and still be NotFound.
        let service = service(InMemoryGameRepository::new());
        for id in ["", "   ", "\t"] {
            let error = service.get(&reader(), id).await.unwrap_err();
            assert!(error.is_not_found(), "id {id:?} should be NotFound");
        }
    }

    #[tokio::test]
    async fn get_malformed_id_is_not_found() {
        let service = service(InMemoryGameRepository::new());
        let error = service.get(&reader(), "not-a-game-id").await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn get_absent_record_is_not_found() {
        let service = service(InMemoryGameRepository::new());
        let id = core_kernel::GameId::new().to_string();
        let error = service.get(&reader(), &id).await.unwrap_err();
        assert!(error.is_not_found());
    }
}

mod creation {
    use super::*;

    #[tokio::test]
    async fn create_assigns_identity_and_persists_fields() {
        let service = service(InMemoryGameRepository::new());
        let input = GameBuilder::new("Catan").genre("Strategy").input();

        let created = service.create(&admin(), input.clone()).await.unwrap();
        let fetched = service
            .get(&reader(), &created.id.to_string())
            .await
            .unwrap();

        assert_eq!(fetched.title, input.title);
        assert_eq!(fetched.genre, input.genre);
    }

    #[tokio::test]
    async fn create_without_admin_role_is_forbidden() {
        let service = service(InMemoryGameRepository::new());
        let error = service
            .create(&reader(), GameInput::titled("Catan"))
            .await
            .unwrap_err();
        assert!(matches!(error, GameError::Forbidden(_)));
    }

    #[tokio::test]
    async fn create_invalid_input_is_bad_request_and_persists_nothing() {
        let repo = InMemoryGameRepository::new();
        let service = service(repo.clone());

        let error = service
            .create(&admin(), GameInput::titled("  "))
            .await
            .unwrap_err();
        assert!(matches!(error, GameError::BadRequest(_)));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn forbidden_takes_precedence_over_invalid_input() {
        let service = service(InMemoryGameRepository::new());
        let error = service
            .create(&reader(), GameInput::titled(""))
            .await
            .unwrap_err();
        assert!(matches!(error, GameError::Forbidden(_)));
    }
}

mod updating {
    use super::*;

    #[tokio::test]
    async fn update_replaces_mutable_fields_and_preserves_identity() {
        let service = service(InMemoryGameRepository::new());
        let created = service
            .create(&admin(), GameInput::titled("Catan"))
            .await
            .unwrap();

        let updated = service
            .update(
                &admin(),
                &created.id.to_string(),
                GameInput::titled("Catan 2"),
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Catan 2");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_without_admin_role_is_forbidden_regardless_of_target() {
        let service = service(InMemoryGameRepository::new());
        // The target does not exist, but the non-admin caller must see
        // Forbidden, not NotFound.
        let error = service
            .update(
                &reader(),
                &core_kernel::GameId::new().to_string(),
                GameInput::titled("Catan"),
            )
            .await
            .unwrap_err();
        assert!(matches!(error, GameError::Forbidden(_)));
    }

    #[tokio::test]
    async fn update_empty_id_is_not_found() {
        let service = service(InMemoryGameRepository::new());
        let error = service
            .update(&admin(), "", GameInput::titled("Catan"))
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn update_absent_record_is_not_found() {
        let service = service(InMemoryGameRepository::new());
        let error = service
            .update(
                &admin(),
                &core_kernel::GameId::new().to_string(),
                GameInput::titled("Catan"),
            )
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn update_racing_concurrent_delete_is_not_found() {
        // The record exists at fetch time but is gone by the time the
        // write lands; the caller must see NotFound, not a store failure.
        let game = Game::new(&GameInput::titled("Catan"));
        let id = game.id.to_string();
        let service = GameService::new(Arc::new(VanishingRepository { game }));

        let error = service
            .update(&admin(), &id, GameInput::titled("Catan 2"))
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }

    /// Repository whose records vanish between fetch and write
    struct VanishingRepository {
        game: Game,
    }

    impl DomainPort for VanishingRepository {}

    #[async_trait]
    impl GameRepository for VanishingRepository {
        async fn get_by_id(&self, _id: GameId) -> Result<Option<Game>, PortError> {
            Ok(Some(self.game.clone()))
        }

        async fn get_page(&self, request: PageRequest) -> Result<Page<Game>, PortError> {
            Ok(Page::empty(request))
        }

        async fn create(&self, game: Game) -> Result<Game, PortError> {
            Ok(game)
        }

        async fn update(&self, game: &Game) -> Result<(), PortError> {
            Err(PortError::not_found("Game", game.id))
        }

        async fn delete(&self, _id: GameId) -> Result<(), PortError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn update_invalid_input_is_bad_request() {
        let service = service(InMemoryGameRepository::new());
        let created = service
            .create(&admin(), GameInput::titled("Catan"))
            .await
            .unwrap();

        let error = service
            .update(&admin(), &created.id.to_string(), GameInput::titled(""))
            .await
            .unwrap_err();
        assert!(matches!(error, GameError::BadRequest(_)));

        // The stored record is untouched.
        let fetched = service
            .get(&reader(), &created.id.to_string())
            .await
            .unwrap();
        assert_eq!(fetched.title, "Catan");
    }
}

mod deletion {
    use super::*;

    #[tokio::test]
    async fn delete_removes_the_record() {
        let service = service(InMemoryGameRepository::new());
        let created = service
            .create(&admin(), GameInput::titled("Catan"))
            .await
            .unwrap();
        let id = created.id.to_string();

        service.delete(&admin(), &id).await.unwrap();
        assert!(service.get(&reader(), &id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn second_handler_delete_is_not_found() {
        // The repository delete is idempotent, but the handler re-checks
        // existence, so a second delete request reports NotFound.
        let service = service(InMemoryGameRepository::new());
        let created = service
            .create(&admin(), GameInput::titled("Catan"))
            .await
            .unwrap();
        let id = created.id.to_string();

        service.delete(&admin(), &id).await.unwrap();
        let error = service.delete(&admin(), &id).await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn delete_without_admin_role_leaves_record_retrievable() {
        let service = service(InMemoryGameRepository::new());
        let created = service
            .create(&admin(), GameInput::titled("Catan"))
            .await
            .unwrap();
        let id = created.id.to_string();

        let error = service.delete(&reader(), &id).await.unwrap_err();
        assert!(matches!(error, GameError::Forbidden(_)));

        let fetched = service.get(&reader(), &id).await.unwrap();
        assert_eq!(fetched.title, "Catan");
    }

    #[tokio::test]
    async fn delete_empty_id_is_not_found() {
        let service = service(InMemoryGameRepository::new());
        let error = service.delete(&admin(), "  ").await.unwrap_err();
        assert!(error.is_not_found());
    }
}
