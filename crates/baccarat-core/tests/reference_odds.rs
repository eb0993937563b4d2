use baccarat_core::engine::{MIN_CARDS, calculate};
use baccarat_core::ev::evaluate;
use baccarat_core::kelly::{KellyConfig, allocate};
use baccarat_core::{AdvisorSettings, Analysis, BetKind, PayoutTable, Rank, ShoeState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn shoe_with(entries: &[(Rank, u8)]) -> ShoeState {
    let mut counts = [0u8; 13];
    for &(rank, count) in entries {
        counts[rank.index()] = count;
    }
    ShoeState::from_counts(8, counts).expect("counts within an 8-deck shoe")
}

fn random_shoe(rng: &mut StdRng) -> ShoeState {
    loop {
        let mut counts = [0u8; 13];
        for slot in counts.iter_mut() {
            *slot = rng.gen_range(0..=32u8);
        }
        let shoe = ShoeState::from_counts(8, counts).expect("random counts in range");
        if shoe.total() >= MIN_CARDS {
            return shoe;
        }
    }
}

#[test]
fn random_shoes_sum_to_one() {
    let mut rng = StdRng::seed_from_u64(0xBACC);
    for _ in 0..6 {
        let shoe = random_shoe(&mut rng);
        let probs = calculate(&shoe);
        assert!(
            (probs.main_total() - 1.0).abs() < 1e-9,
            "shoe {:?} sums to {}",
            shoe.counts(),
            probs.main_total()
        );
    }
}

#[test]
fn depleted_shoes_sum_to_one() {
    let cases = [
        shoe_with(&[(Rank::Ace, 3), (Rank::Five, 2), (Rank::King, 1)]),
        shoe_with(&[(Rank::Nine, 1), (Rank::Eight, 1), (Rank::Two, 4)]),
        shoe_with(&[(Rank::Six, 7), (Rank::Seven, 1)]),
    ];
    for shoe in cases {
        assert!(shoe.total() >= MIN_CARDS);
        let probs = calculate(&shoe);
        assert!((probs.main_total() - 1.0).abs() < 1e-9, "{:?}", shoe.counts());
    }
}

#[test]
fn missing_values_zero_their_branches() {
    // Aces and kings only: no total above three is reachable.
    let shoe = shoe_with(&[(Rank::Ace, 20), (Rank::King, 20)]);
    let probs = calculate(&shoe);
    for point in 4..10 {
        assert_eq!(probs.tie_by_point[point], 0.0, "tie on {point}");
    }
    assert_eq!(probs.super6, 0.0);
    assert!((probs.main_total() - 1.0).abs() < 1e-9);
}

#[test]
fn threes_reach_super6_but_zeros_cannot() {
    // Threes and zeros: banker can only reach six with two threes.
    let threes = shoe_with(&[(Rank::Three, 16), (Rank::Queen, 16)]);
    assert!(calculate(&threes).super6_two_card > 0.0);

    let zeros = shoe_with(&[(Rank::Queen, 16), (Rank::Jack, 16)]);
    let probs = calculate(&zeros);
    assert_eq!(probs.super6, 0.0);
    assert_eq!(probs.player_win, 0.0);
    assert_eq!(probs.banker_win, 0.0);
    assert_eq!(probs.tie_by_point[0], 1.0);
}

#[test]
fn fresh_shoe_matches_published_odds() {
    let probs = calculate(&ShoeState::standard());
    assert!((probs.banker_win - 0.458597).abs() < 1e-5);
    assert!((probs.player_win - 0.446247).abs() < 1e-5);
    assert!((probs.tie - 0.095156).abs() < 1e-5);
    let pair = 13.0 * (32.0 / 416.0) * (31.0 / 415.0);
    assert!((probs.player_pair - pair).abs() < 1e-15);
}

#[test]
fn below_six_cards_everything_is_zero_and_ev_is_rebate() {
    let shoe = shoe_with(&[(Rank::Two, 5)]);
    let probs = calculate(&shoe);
    assert!(probs.is_empty());

    let report = evaluate(&probs, &PayoutTable::default(), 2.0, shoe.total());
    assert_eq!(report.total_cards, 5);
    assert_eq!(report.bet(BetKind::Player).unwrap().ev, 0.01);
    assert_eq!(report.bet(BetKind::Banker).unwrap().ev, 0.01);
    assert_eq!(report.bet(BetKind::Tie).unwrap().ev, -1.0 + 0.01);
    assert_eq!(report.bet(BetKind::Super6).unwrap().ev, -1.0 + 0.01);
}

#[test]
fn results_are_bit_identical_across_calls() {
    let mut rng = StdRng::seed_from_u64(7);
    let shoe = random_shoe(&mut rng);
    let settings = AdvisorSettings::default();
    let a = Analysis::compute(&shoe, &settings, 3);
    let b = Analysis::compute(&shoe, &settings, 3);
    assert_eq!(a, b);
    for (x, y) in a.report.bets.iter().zip(&b.report.bets) {
        assert_eq!(x.ev.to_bits(), y.ev.to_bits());
    }
}

#[test]
fn commission_shifts_every_ev_linearly() {
    let probs = calculate(&ShoeState::standard());
    let payouts = PayoutTable::default();
    let low = evaluate(&probs, &payouts, 1.0, 416);
    let high = evaluate(&probs, &payouts, 1.6, 416);
    for (a, b) in low.bets.iter().zip(&high.bets) {
        let shift = b.ev - a.ev;
        assert!((shift - 0.6 / 200.0).abs() < 1e-12, "{:?} shifted {shift}", a.kind);
    }
}

#[test]
fn kelly_stakes_follow_edge() {
    // A king-heavy shoe makes both pair bets strongly positive.
    let mut entries: Vec<(Rank, u8)> = Rank::ORDERED.iter().map(|&r| (r, 1)).collect();
    entries[Rank::King.index()] = (Rank::King, 32);
    let shoe = shoe_with(&entries);
    let probs = calculate(&shoe);
    let report = evaluate(&probs, &PayoutTable::default(), 2.0, shoe.total());
    let capital = 1_000_000;
    let recs = allocate(&report, capital, &KellyConfig::default());

    assert!(recs.windows(2).all(|w| w[0].stake >= w[1].stake));
    for rec in &recs {
        let scaled = rec.kelly_fraction * 0.25 * capital as f64;
        if rec.ev > 0.0 && rec.probability > 0.01 && scaled >= 1.0 {
            assert!(rec.stake > 0 && rec.stake <= capital, "{:?}", rec);
            assert!(rec.should_bet);
        }
        if rec.ev <= 0.0 || rec.probability <= 0.01 {
            assert_eq!(rec.stake, 0, "{:?}", rec);
            assert!(!rec.should_bet);
        }
    }

    let pair = recs
        .iter()
        .find(|r| r.kind == BetKind::BankerPair)
        .expect("banker pair ranked");
    assert!(pair.should_bet);
    // Banker pair precedes player pair on equal stakes.
    let positions: Vec<BetKind> = recs.iter().map(|r| r.kind).collect();
    let banker_pos = positions.iter().position(|&k| k == BetKind::BankerPair);
    let player_pos = positions.iter().position(|&k| k == BetKind::PlayerPair);
    assert!(banker_pos < player_pos);
}
