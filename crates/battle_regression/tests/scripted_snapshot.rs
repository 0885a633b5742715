use battle_core::Action;
use battle_regression::scripted_trace;

#[test]
fn scripted_match_snapshot() {
    // Draw order: attack, retaliation, heal, special, retaliation.
    let draws = [10, 8, 12];
    let script = [
        Action::Heal,
        Action::Attack,
        Action::Heal,
        Action::SpecialAttack,
        Action::SelfDestruct,
        Action::Attack,
    ];
    let trace = scripted_trace(&draws, &script);

    insta::assert_json_snapshot!(trace, @r###"
    {
      "summary": {
        "outcome": "lose",
        "player_health": 0,
        "monster_health": 80,
        "applied_turns": 4,
        "rejected_turns": 1
      },
      "log": [
        {
          "actor": "monster",
          "kind": "damage",
          "amount": 10,
          "text": "takes 10 damages"
        },
        {
          "actor": "player",
          "kind": "damage",
          "amount": 8,
          "text": "takes 8 damages"
        },
        {
          "actor": "player",
          "kind": "heal",
          "amount": 12,
          "text": "heal 12 life points"
        },
        {
          "actor": "monster",
          "kind": "damage",
          "amount": 10,
          "text": "takes 10 damages"
        },
        {
          "actor": "player",
          "kind": "damage",
          "amount": 8,
          "text": "takes 8 damages"
        },
        {
          "actor": "player",
          "kind": "damage",
          "amount": 100,
          "text": "takes 100 damages"
        }
      ]
    }
    "###);
}
