//! Text rendering of a snapshot.

use crate::games::four_in_a_row::{GameSnapshot, Phase};

/// Board, status line and button, ready to print.
pub fn render(snapshot: &GameSnapshot) -> String {
    let winning: &[usize] = match &snapshot.winning_line {
        Some(line) => &line[..],
        None => &[],
    };
    format!(
        "{}\n\n{}\n[{}]",
        snapshot.board.display_marked(winning),
        status_line(snapshot),
        snapshot.button_label()
    )
}

/// One-line description of whose turn it is or how the game ended.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    match snapshot.phase {
        Phase::AwaitingCoinFlip => "Press the button to flip the coin.".to_string(),
        Phase::Finished => match (snapshot.winning_line, snapshot.current_player) {
            (Some(line), Some(winner)) => {
                let cells: Vec<String> = line.iter().map(|i| i.to_string()).collect();
                format!("{} wins with {}!", winner, cells.join("-"))
            }
            _ => "Draw!".to_string(),
        },
        Phase::InProgress => match snapshot.current_player {
            Some(marker) if snapshot.is_human_turn() => format!("Your turn ({}).", marker),
            Some(marker) => format!(
                "Computer's turn ({}). Press the button to let it play.",
                marker
            ),
            None => "Waiting for a player.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::four_in_a_row::{GameState, Marker};

    #[test]
    fn test_render_fresh() {
        let text = render(&GameSnapshot::from(&GameState::new()));
        assert!(text.starts_with(" 0| 1| 2| 3"));
        assert!(text.contains("flip the coin"));
        assert!(text.ends_with("[Flip]"));
    }

    #[test]
    fn test_status_turns() {
        let human = GameSnapshot::from(&GameState::started(Marker::O));
        assert_eq!(status_line(&human), "Your turn (O).");
        let computer = GameSnapshot::from(&GameState::started(Marker::X));
        assert!(status_line(&computer).starts_with("Computer's turn (X)."));
        assert!(render(&computer).ends_with("[Start]"));
    }

    #[test]
    fn test_status_win() {
        let mut state = GameState::started(Marker::O);
        for i in [0, 4, 1, 5, 2, 6, 3] {
            state.submit_move(i).unwrap();
        }
        let snapshot = GameSnapshot::from(&state);
        assert_eq!(status_line(&snapshot), "O wins with 0-1-2-3!");
        let text = render(&snapshot);
        assert!(text.starts_with("*O|*O|*O|*O\n"));
        assert!(text.contains(" X| X| X| 7"));
        assert!(text.ends_with("[Clear]"));
    }
}
