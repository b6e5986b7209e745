use crate::components::{Health, Projectile};
use crate::config::{ArenaConfig, ConfigError};
use crate::constants::*;
use crate::enums::*;
use crate::events::ArenaEvent;
use crate::types::{Bounds, Position, SimTime, Velocity};

// ---- Health ----

#[test]
fn test_health_damage_is_not_floored() {
    let mut health = Health::new(30);
    health.apply_damage(PLAYER_CONTACT_DAMAGE);
    assert_eq!(health.current, -20);
    assert!(health.is_defeated());
}

#[test]
fn test_health_heal_is_not_capped() {
    let mut health = Health::new(PLAYER_START_HEALTH);
    for _ in 0..10 {
        health.apply_heal(POWERUP_HEAL);
    }
    assert_eq!(health.current, PLAYER_START_HEALTH + 100);
}

#[test]
fn test_health_zero_is_defeated() {
    let mut health = Health::new(1);
    health.apply_damage(1);
    assert!(health.is_defeated());
    assert!(!Health::new(1).is_defeated());
}

// ---- Projectile lifespan ----

#[test]
fn test_projectile_lifespan_strictly_decreases() {
    let mut projectile = Projectile {
        damage: PROJECTILE_DAMAGE,
        lifespan: 3,
        scale: PROJECTILE_SCALE,
    };
    let mut previous = projectile.lifespan;
    let mut active_flags = Vec::new();
    for _ in 0..5 {
        active_flags.push(projectile.advance());
        assert!(projectile.lifespan < previous);
        previous = projectile.lifespan;
    }
    assert_eq!(active_flags, vec![true, true, false, false, false]);
    assert!(!projectile.is_active());
}

// ---- Variant capabilities ----

#[test]
fn test_only_blorbs_drift() {
    assert!(EnemyKind::Blorb.is_drift_capable());
    assert!(!EnemyKind::Eyeball.is_drift_capable());
    assert!(!EnemyKind::EyeballCluster.is_drift_capable());
}

#[test]
fn test_only_clusters_burst() {
    assert!(EnemyKind::EyeballCluster.bursts_on_death());
    assert!(!EnemyKind::Blorb.bursts_on_death());
    assert!(!EnemyKind::Eyeball.bursts_on_death());
}

// ---- Geometry ----

#[test]
fn test_bounds_contains_with_margin() {
    let bounds = Bounds::new(100.0, 50.0);
    assert!(bounds.contains(&Position::new(-10.0, 25.0), 20.0));
    assert!(bounds.contains(&Position::new(-20.0, 25.0), 20.0));
    assert!(!bounds.contains(&Position::new(-20.5, 25.0), 20.0));
    assert!(!bounds.contains(&Position::new(50.0, 70.5), 20.0));
    assert!(!bounds.contains(&Position::new(50.0, 51.0), 0.0));
}

#[test]
fn test_bounds_clamp() {
    let bounds = Bounds::new(100.0, 50.0);
    assert_eq!(
        bounds.clamp(Position::new(-5.0, 80.0)),
        Position::new(0.0, 50.0)
    );
}

#[test]
fn test_velocity_from_angle() {
    let v = Velocity::from_angle(std::f32::consts::FRAC_PI_2, 10.0);
    assert!(v.x.abs() < 1e-4);
    assert!((v.y - 10.0).abs() < 1e-4);
    assert!((v.speed() - 10.0).abs() < 1e-4);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..FRAME_RATE {
        time.advance(FRAME_DT);
    }
    assert_eq!(time.tick, FRAME_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
}

// ---- Config ----

#[test]
fn test_config_partial_json_keeps_defaults() {
    let config = ArenaConfig::from_json_str(r#"{ "max_enemies": 3, "seed": 7 }"#).unwrap();
    assert_eq!(config.max_enemies, 3);
    assert_eq!(config.seed, 7);
    assert_eq!(config.player_start_health, PLAYER_START_HEALTH);
    assert_eq!(config.eyeball_policy, EyeballPolicy::Launch);
}

#[test]
fn test_config_eyeball_policy_by_name() {
    let config = ArenaConfig::from_json_str(r#"{ "eyeball_policy": "Orbit" }"#).unwrap();
    assert_eq!(config.eyeball_policy, EyeballPolicy::Orbit);
}

#[test]
fn test_config_rejects_bad_weight() {
    let err = ArenaConfig::from_json_str(r#"{ "blorb_spawn_weight": 1.5 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_config_rejects_zero_interval() {
    let err = ArenaConfig::from_json_str(r#"{ "spawn_interval_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_config_rejects_malformed_json() {
    let err = ArenaConfig::from_json_str("{ max_enemies: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_missing_file() {
    let err = ArenaConfig::load(std::path::Path::new("/nonexistent/blorb.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

// ---- Events ----

#[test]
fn test_event_is_tagged() {
    let event = ArenaEvent::ClusterBurst {
        position: Position::new(1.0, 2.0),
        count: 5,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""type":"ClusterBurst""#), "got {json}");
}
