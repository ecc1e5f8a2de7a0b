//! CLI blackjack example.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bjtable::{
    BetError, Card, CardView, Continuation, Game, MessageKind, RoundState, Suit, TableOptions,
    TableView,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter("BJTABLE_LOG")).init();
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(TableOptions::default(), seed);

    loop {
        let view = game.view();
        print_status(&view);

        if view.balance < game.options().min_bet && !view.state.is_active() {
            println!("You are out of money. Type 'r' to start over or 'q' to quit.");
        }

        let command = prompt_line("[d]eal [b]et <n> [+]/[-] [m]in [x]max [2]double [r]eset [q]uit: ");
        let mut parts = command.split_whitespace();
        match parts.next().unwrap_or("") {
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            "b" | "bet" => {
                let amount = parts.next().and_then(|value| value.parse::<usize>().ok());
                match amount {
                    Some(amount) => report_bet(game.request_bet(amount)),
                    None => println!("Please enter a number."),
                }
            }
            "+" => report_bet(game.adjust_bet(1)),
            "-" => report_bet(game.adjust_bet(-1)),
            "m" | "min" => report_bet(game.set_min_bet()),
            "x" | "max" => report_bet(game.set_max_bet()),
            "2" | "double" => report_bet(game.double_bet()),
            "r" | "reset" => {
                if let Err(err) = game.reset_session(false) {
                    println!("Reset error: {err}");
                }
            }
            "d" | "deal" => match game.deal() {
                Ok(_) => play_round(&mut game),
                Err(err) => println!("Deal error: {err}"),
            },
            _ => println!("Unknown command."),
        }
    }
}

fn play_round(game: &mut Game) {
    while game.state() == RoundState::PlayerTurn {
        let view = game.view();
        print_table(&view);
        print_message(&view);

        let result = match prompt_line("Action: [h]it [s]tand [r]eset: ").as_str() {
            "h" | "hit" => game.hit().map(|_| ()),
            "s" | "stand" => game.stand(),
            "r" | "reset" => {
                if prompt_line("Reset during game? (y/n): ") == "y" {
                    if let Err(err) = game.reset_session(true) {
                        println!("Reset error: {err}");
                    }
                    return;
                }
                Ok(())
            }
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Action error: {err}");
        }
    }

    if let Some(Continuation::ResolveDealer { delay_ms }) = game.pending() {
        let view = game.view();
        print_table(&view);
        print_message(&view);
        thread::sleep(Duration::from_millis(u64::from(delay_ms)));
        game.run_pending();
    }

    let view = game.view();
    print_table(&view);
    if let Some(result) = game.last_result() {
        println!("Payout: {} (net {})", result.winnings, result.net());
    }
}

fn report_bet(result: Result<usize, BetError>) {
    if let Err(err) = result {
        println!("Bet error: {err}");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_status(view: &TableView) {
    println!(
        "\nBalance: ${} | Bet: ${} | Last win: ${}",
        view.balance, view.bet, view.last_winnings
    );
    println!(
        "Games: {} | Wins: {} | Losses: {} | Win rate: {}% | Best: ${}",
        view.stats.games_played,
        view.stats.wins,
        view.stats.losses,
        view.stats.win_rate,
        view.stats.max_win
    );
    print_message(view);
}

fn print_message(view: &TableView) {
    let code = match view.message.kind {
        MessageKind::Info => "33",
        MessageKind::Success => "32",
        MessageKind::Warning => "35",
        MessageKind::Loss => "31",
    };
    println!("{}", colorize(&view.message.text, code));
}

fn print_table(view: &TableView) {
    let dealer = view
        .dealer_cards
        .iter()
        .map(format_dealer_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("\nDealer: {dealer} (value {})", view.dealer_score);

    let player = view
        .player_cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("You:    {player} (value {})\n", view.player_score);
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer_card(view: &CardView) -> String {
    if view.face_down {
        "??".to_string()
    } else {
        format_card(&view.card)
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
