//! Progression, boss settlement and status-effect behavior through the
//! public API.

use battle_core::config::BattleConfig;
use battle_core::env::BattleRng;
use battle_core::state::{fixed_turn_order, ActorSlot, Battle, Boss, EnemyKind, KeyItem, StatusKind};
use battle_core::stats::{exp_for_next_level, gain_experience};
use battle_core::{
    ActionOutcome, BattleAction, BattleEngine, Inventory, Job, Party, SkillEffect, SkillId,
};
use battle_content::{standard_env, JobTable, BESTIARY};
use battle_core::BestiaryOracle;

fn solo_party(job: Job) -> Party {
    let mut party = Party::new();
    party.add_member("Tess", job, &JobTable);
    party
}

#[test]
fn leveling_thresholds_are_exact() {
    // Level 1 -> 2 at 100 EXP; level 2 -> 3 at 400 cumulative.
    assert_eq!(exp_for_next_level(1), 100);
    assert_eq!(exp_for_next_level(2), 400);

    let mut party = solo_party(Job::Knight);
    let mut rng = BattleRng::new(1);
    let ups = gain_experience(&mut party.members[0], 100, &mut rng, &JobTable);
    assert_eq!(ups.len(), 1);
    assert_eq!(party.members[0].stats.level, 2);

    let ups = gain_experience(&mut party.members[0], 299, &mut rng, &JobTable);
    assert!(ups.is_empty());
    assert_eq!(party.members[0].stats.level, 2);

    let ups = gain_experience(&mut party.members[0], 1, &mut rng, &JobTable);
    assert_eq!(ups.len(), 1);
    assert_eq!(party.members[0].stats.level, 3);
}

#[test]
fn mage_unlocks_second_tier_ice_at_level_four() {
    let mut party = solo_party(Job::Mage);
    let mut rng = BattleRng::new(2);
    // Enough for levels 2, 3 and 4 (100 + 400 + 900 thresholds).
    gain_experience(&mut party.members[0], 900, &mut rng, &JobTable);
    assert_eq!(party.members[0].stats.level, 4);
    assert!(party.members[0].knows_skill(SkillId::ICE2));
}

#[test]
fn hp_never_exceeds_max_after_heals_or_level_ups() {
    let mut party = solo_party(Job::Priest);
    let mut rng = BattleRng::new(3);
    for _ in 0..50 {
        gain_experience(&mut party.members[0], 500, &mut rng, &JobTable);
        let stats = &party.members[0].stats;
        assert!(stats.hp <= stats.max_hp);
        assert!(stats.mp <= stats.max_mp);
    }
}

#[test]
fn level_ten_boss_pays_exactly_one_thousand_each_to_every_living_member() {
    let env = standard_env();
    let mut party = solo_party(Job::Knight);
    party.add_member("Lio", Job::Mage, &JobTable);
    party.add_member("Vex", Job::Thief, &JobTable);
    let mut inventory = Inventory::new();
    let mut boss = Boss::new("Wind Djinn", 60, 10, 5, 10, KeyItem::WindCrystal);
    let mut battle = Battle::against_boss(party.len(), 17);

    let mut engine =
        BattleEngine::new(&mut battle, &mut party, &mut inventory, Some(&mut boss), env).unwrap();
    for _ in 0..200 {
        if engine.is_over() {
            break;
        }
        match engine.whose_turn() {
            ActorSlot::Party(actor) => {
                engine.submit_action(&BattleAction::attack(actor, 0)).unwrap();
            }
            _ => {
                engine.advance_enemy_turn().unwrap();
            }
        }
    }
    assert!(engine.is_victory());
    let summary = engine.settle_rewards().unwrap();

    assert_eq!(summary.exp, 1000);
    assert_eq!(summary.gold, 1000);
    assert_eq!(summary.key_item, Some(KeyItem::WindCrystal));
    assert!(summary.drops.is_empty(), "boss battles drop nothing");
    assert_eq!(party.gold, 1000);
    assert!(boss.defeated);
    // Full amount to each living member, not split.
    for member in &party.members {
        if member.is_alive() {
            assert_eq!(member.stats.experience, 1000);
        }
    }
}

#[test]
fn toxic_cloud_can_poison_the_whole_pack() {
    let env = standard_env();
    let mut afflicted_someone = false;
    for seed in 0..40 {
        let mut party = solo_party(Job::Mage);
        {
            let mage = &mut party.members[0].stats;
            mage.max_mp = 500;
            mage.mp = 500;
        }
        let mut inventory = Inventory::new();
        let mut battle = {
            let mut battle = Battle {
                enemies: Default::default(),
                is_boss_battle: false,
                turn_order: fixed_turn_order(1, 2, false),
                cursor: 0,
                won: false,
                fled: false,
                rng: BattleRng::new(seed),
                config: BattleConfig::default(),
            };
            battle.enemies.push(BESTIARY.spawn(EnemyKind::Orc, 3));
            battle.enemies.push(BESTIARY.spawn(EnemyKind::Wolf, 3));
            battle
        };

        let mut engine =
            BattleEngine::new(&mut battle, &mut party, &mut inventory, None, env).unwrap();
        let outcome = engine
            .submit_action(&BattleAction::skill(0, SkillId::TOXIC_CLOUD, 0))
            .unwrap();
        let ActionOutcome::Skill {
            effect: SkillEffect::Debuff { afflicted, resisted },
            ..
        } = outcome
        else {
            panic!("expected a debuff outcome");
        };
        assert_eq!(afflicted.len() + resisted.len(), 2);
        drop(engine);

        for (i, enemy) in battle.enemies.iter().enumerate() {
            let listed = afflicted
                .iter()
                .any(|t| matches!(t, battle_core::TargetId::Enemy(idx) if *idx == i));
            assert_eq!(enemy.status.has(StatusKind::Poison), listed);
        }
        afflicted_someone |= !afflicted.is_empty();
    }
    assert!(afflicted_someone, "60% chance never landed across 40 battles");
}

#[test]
fn prayer_heals_and_grants_regen_to_the_living() {
    let env = standard_env();
    let mut party = solo_party(Job::Priest);
    party.add_member("Argus", Job::Knight, &JobTable);
    party.members[1].stats.hp = 10;
    let mut inventory = Inventory::new();
    let mut battle = {
        let mut battle = Battle {
            enemies: Default::default(),
            is_boss_battle: false,
            turn_order: fixed_turn_order(2, 1, false),
            cursor: 0,
            won: false,
            fled: false,
            rng: BattleRng::new(9),
            config: BattleConfig::default(),
        };
        battle.enemies.push(BESTIARY.spawn(EnemyKind::Goblin, 1));
        battle
    };

    let mut engine = BattleEngine::new(&mut battle, &mut party, &mut inventory, None, env).unwrap();
    let outcome = engine
        .submit_action(&BattleAction::skill(0, SkillId::PRAYER, 0))
        .unwrap();
    let ActionOutcome::Skill {
        effect:
            SkillEffect::Healing {
                heals,
                regen_granted,
                ..
            },
        ..
    } = outcome
    else {
        panic!("expected a healing outcome");
    };
    assert!(regen_granted);
    assert_eq!(heals.len(), 2);
    drop(engine);

    assert_eq!(party.members[1].stats.hp, 30);
    for member in &party.members {
        assert!(member.buffs.has(battle_core::BuffKind::RegenMp));
    }
}

#[test]
fn defend_doubles_defense_for_one_round() {
    let env = standard_env();
    let mut party = solo_party(Job::Knight);
    let mut inventory = Inventory::new();
    let mut battle = {
        let mut battle = Battle {
            enemies: Default::default(),
            is_boss_battle: false,
            turn_order: fixed_turn_order(1, 1, false),
            cursor: 0,
            won: false,
            fled: false,
            rng: BattleRng::new(31),
            config: BattleConfig::default(),
        };
        battle.enemies.push(BESTIARY.spawn(EnemyKind::Goblin, 1));
        battle
    };

    let mut engine = BattleEngine::new(&mut battle, &mut party, &mut inventory, None, env).unwrap();
    engine.submit_action(&BattleAction::defend(0)).unwrap();
    drop(engine);
    // The stance holds through the enemy's round...
    assert!(party.members[0].buffs.has(battle_core::BuffKind::Defend));

    let mut engine = BattleEngine::new(&mut battle, &mut party, &mut inventory, None, env).unwrap();
    engine.advance_enemy_turn().unwrap();
    drop(engine);
    assert!(party.members[0].buffs.has(battle_core::BuffKind::Defend));

    // ...and expires during the member's next upkeep.
    let mut engine = BattleEngine::new(&mut battle, &mut party, &mut inventory, None, env).unwrap();
    engine.submit_action(&BattleAction::attack(0, 0)).unwrap();
    drop(engine);
    assert!(!party.members[0].buffs.has(battle_core::BuffKind::Defend));
}

#[test]
fn silence_blocks_skills_but_not_attacks() {
    let env = standard_env();
    let mut party = solo_party(Job::Mage);
    party.members[0].status.apply(StatusKind::Silence, 3);
    let mut inventory = Inventory::new();
    let mut battle = {
        let mut battle = Battle {
            enemies: Default::default(),
            is_boss_battle: false,
            turn_order: fixed_turn_order(1, 1, false),
            cursor: 0,
            won: false,
            fled: false,
            rng: BattleRng::new(41),
            config: BattleConfig::default(),
        };
        battle.enemies.push(BESTIARY.spawn(EnemyKind::Goblin, 1));
        battle
    };

    let mut engine = BattleEngine::new(&mut battle, &mut party, &mut inventory, None, env).unwrap();
    let err = engine
        .submit_action(&BattleAction::skill(0, SkillId::FIRE, 0))
        .unwrap_err();
    assert_eq!(err, battle_core::ActionError::Silenced);
    // A plain attack still goes through.
    let outcome = engine.submit_action(&BattleAction::attack(0, 0)).unwrap();
    assert!(matches!(outcome, ActionOutcome::Attack { .. }));
}
