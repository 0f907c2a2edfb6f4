use pcg32::{Pcg32, Pcg32x2};

const CARDS: usize = 52;
const SUITS: usize = 4;
const NUMBER_NAMES: [char; 13] = ['A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K'];
const SUIT_NAMES: [char; SUITS] = ['h', 'c', 'd', 's'];

#[derive(Debug, PartialEq)]
struct DemoOptions {
    rounds: usize,
    nondeterministic_seed: bool,
    dual: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self { rounds: 5, nondeterministic_seed: false, dual: false }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Option<DemoOptions> {
    let mut options = DemoOptions::default();
    for arg in args {
        match arg.as_str() {
            "-r" | "-R" => options.nondeterministic_seed = true,
            "--x2" => options.dual = true,
            n => options.rounds = n.parse().ok()?,
        }
    }
    Some(options)
}

fn toss_coins(bounded: &mut impl FnMut(u32) -> u32) -> String {
    (0..65).map(|_| if bounded(2) != 0 { 'H' } else { 'T' }).collect()
}

fn roll_dice(bounded: &mut impl FnMut(u32) -> u32) -> Vec<u32> {
    (0..33).map(|_| bounded(6) + 1).collect()
}

// Fisher-Yates, swapping from the back
fn deal_cards(bounded: &mut impl FnMut(u32) -> u32) -> [usize; CARDS] {
    let mut cards: [usize; CARDS] = core::array::from_fn(|i| i);
    for i in (2..=CARDS).rev() {
        let chosen = bounded(i as u32) as usize;
        cards.swap(chosen, i - 1);
    }
    cards
}

fn card_name(card: usize) -> String {
    format!("{}{}", NUMBER_NAMES[card / SUITS], SUIT_NAMES[card % SUITS])
}

fn print_games(bounded: &mut impl FnMut(u32) -> u32) {
    println!("  Coins: {}", toss_coins(bounded));

    let rolls = roll_dice(bounded);
    let rolls: Vec<String> = rolls.iter().map(|r| r.to_string()).collect();
    println!("  Rolls: {}", rolls.join(" "));

    print!("  Cards:");
    for (i, &card) in deal_cards(bounded).iter().enumerate() {
        print!(" {}", card_name(card));
        if (i + 1) % 22 == 0 {
            print!("\n\t");
        }
    }
    println!("\n");
}

fn run_single(options: &DemoOptions) {
    let mut rng = if options.nondeterministic_seed {
        Pcg32::from_seed_stream(rand::random(), rand::random())
    } else {
        Pcg32::from_seed_stream(42, 54)
    };

    println!("pcg32_random_r:");
    println!("      -  result:      32-bit unsigned int (uint32_t)");
    println!("      -  period:      2^64   (* 2^63 streams)");
    println!("      -  state type:  pcg32_random_t ({} bytes)", Pcg32::state_size());
    println!("      -  output func: XSH-RR");
    println!();

    for round in 1..=options.rounds {
        println!("Round {}:", round);
        print!("  32bit:");
        for _ in 0..6 {
            print!(" 0x{:08x}", rng.next());
        }
        println!();
        print_games(&mut |bound| rng.bounded_next(bound));
    }
}

fn run_dual(options: &DemoOptions) {
    let mut rng = if options.nondeterministic_seed {
        Pcg32x2::from_seeds(rand::random(), rand::random(), rand::random(), rand::random())
    } else {
        Pcg32x2::from_seeds(42, 42, 54, 54)
    };

    println!("pcg32x2_random_r:");
    println!("      -  result:      64-bit unsigned int (uint64_t)");
    println!("      -  period:      2^64   (* ~2^126 streams)");
    println!("      -  state space: ~2^254");
    println!("      -  state type:  pcg32x2_random_t ({} bytes)", Pcg32x2::state_size());
    println!("      -  output func: XSH-RR (x 2)");
    println!();

    for round in 1..=options.rounds {
        println!("Round {}:", round);
        print!("  64bit:");
        for i in 0..6 {
            if i > 0 && i % 3 == 0 {
                print!("\n\t");
            }
            print!(" 0x{:016x}", rng.next());
        }
        println!();
        print_games(&mut |bound| rng.bounded_next(u64::from(bound)) as u32);
    }
}

fn main() {
    let Some(options) = parse_args(std::env::args().skip(1)) else {
        eprintln!("usage: pcg32 [-r] [--x2] [rounds]");
        std::process::exit(1);
    };

    if options.dual {
        run_dual(&options);
    } else {
        run_single(&options);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_options() {
        assert_eq!(parse_args(args(&[])), Some(DemoOptions::default()));
        assert_eq!(
            parse_args(args(&["-r", "3", "--x2"])),
            Some(DemoOptions { rounds: 3, nondeterministic_seed: true, dual: true })
        );
        assert_eq!(parse_args(args(&["five"])), None);
    }

    #[test]
    fn first_round_matches_reference_demo() {
        let mut rng = Pcg32::from_seed_stream(42, 54);
        for _ in 0..6 {
            rng.next();
        }
        let mut bounded = |bound| rng.bounded_next(bound);

        assert_eq!(
            toss_coins(&mut bounded),
            "HHTTTHTHHHTHTTTHHHHHTTTHHHTHTHTHTTHTTTHHHHHHTTTTHHTTTTTHTTTTTTTHT"
        );
        assert_eq!(
            roll_dice(&mut bounded),
            vec![
                3, 4, 1, 1, 2, 2, 3, 2, 4, 3, 2, 4, 3, 3, 5, 2, 3, 1, 3, 1, 5, 1, 4, 1, 5, 6, 4, 6,
                6, 2, 6, 3, 3,
            ]
        );

        let cards: Vec<String> = deal_cards(&mut bounded)
            .iter()
            .map(|&c| card_name(c))
            .collect();
        assert_eq!(
            cards.join(" "),
            concat!(
                "Qd Ks 6d 3s 3d 4c 3h Td Kc 5c Jh Kd Jd As 4s 4h Ad Th Ac Jc 7s Qs ",
                "2s 7h Kh 2d 6c Ah 4d Qh 9h 6s 5s 2c 9c Ts 8d 9s 3c 8c Js 5d 2h 6h ",
                "7d 8s 9d 5h 8h Qc 7c Tc",
            )
        );

        assert_eq!(rng.next(), 0x74ab93ad);
    }

    #[test]
    fn deal_is_a_permutation() {
        let mut rng = Pcg32x2::from_seeds(1, 2, 3, 4);
        let mut cards = deal_cards(&mut |bound| rng.bounded_next(u64::from(bound)) as u32);
        cards.sort();
        let expected: [usize; CARDS] = core::array::from_fn(|i| i);
        assert_eq!(cards, expected);
    }
}
