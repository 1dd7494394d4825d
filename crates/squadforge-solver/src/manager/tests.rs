//! Tests for background optimization.

use std::sync::Arc;

use squadforge_scoring::is_legal;
use squadforge_test::{balanced_pool, six_nations_pool, stars};

use super::*;

fn shared(pool: Vec<Player>) -> Arc<[Player]> {
    pool.into()
}

#[test]
fn test_blocking_result() {
    let manager = OptimizerManager::default();
    let constraints = ConstraintSet::default();

    let handle = manager
        .solve(shared(six_nations_pool()), constraints.clone())
        .unwrap();
    let result = handle.blocking_result().unwrap();

    let solved = result.solved().unwrap();
    assert!(solved.is_optimal());
    assert!(is_legal(solved.squad(), &constraints));
}

#[tokio::test]
async fn test_async_result() {
    let manager = OptimizerManager::default();
    let constraints = ConstraintSet::new().with_bench(false);

    let handle = manager
        .solve(shared(six_nations_pool()), constraints.clone())
        .unwrap();
    let result = handle.result().await.unwrap();

    let squad = result.squad().unwrap();
    assert!(squad.bench().is_empty());
    assert!(is_legal(squad, &constraints));
}

#[test]
fn test_cancel_discards_partial_result() {
    let manager = OptimizerManager::new(SearchConfig {
        node_limit: None,
        enable_pruning: false,
        ..SearchConfig::default()
    });

    let handle = manager
        .solve(shared(balanced_pool(8)), ConstraintSet::default())
        .unwrap();
    handle.cancel();
    assert!(handle.is_cancelled());

    assert_eq!(handle.blocking_result(), Err(SquadForgeError::Cancelled));
}

#[test]
fn test_invalid_constraints_rejected_before_start() {
    let manager = OptimizerManager::default();
    let constraints = ConstraintSet::new().with_budget(stars(-5));

    let err = manager
        .solve(shared(six_nations_pool()), constraints)
        .unwrap_err();
    assert!(matches!(err, SquadForgeError::InvalidConstraints(_)));
}

#[test]
fn test_concurrent_requests_share_pool() {
    let manager = OptimizerManager::default();
    let pool = shared(six_nations_pool());

    let tight = manager
        .solve(Arc::clone(&pool), ConstraintSet::new().with_budget(stars(180)))
        .unwrap();
    let loose = manager
        .solve(Arc::clone(&pool), ConstraintSet::default())
        .unwrap();

    let tight = tight.blocking_result().unwrap();
    let loose = loose.blocking_result().unwrap();
    let tight_score = tight.solved().unwrap().score;
    let loose_score = loose.solved().unwrap().score;

    assert!(tight.solved().unwrap().snapshot.total_cost <= stars(180));
    assert!(loose_score.points() >= tight_score.points());
}
