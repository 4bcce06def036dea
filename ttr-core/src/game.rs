//! Destination tickets and the play session that follows one.

use crate::board::Board;
use crate::error::{GraphError, Result};
use crate::path::Path;
use crate::route::Route;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// A pair of cities with no direct route, and the cheapest way between them.
#[derive(Clone, Debug, Serialize)]
pub struct Ticket {
    pub src: String,
    pub dst: String,
    /// Train cars on the cheapest connection.
    pub goal: u32,
    pub route: Path<String, Route>,
}

impl Board {
    /// Draw a random destination ticket.
    ///
    /// Needs more than two cities. Only ordered pairs of distinct cities that
    /// share no direct route qualify, and the pair must be connected. Returns
    /// `None` when no pair qualifies.
    pub fn draw_ticket<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Ticket> {
        if self.city_count() <= 2 {
            return None;
        }
        let cities: Vec<&str> = self.cities().collect();
        let mut candidates: Vec<(&str, &str)> = cities
            .iter()
            .flat_map(|&a| cities.iter().map(move |&b| (a, b)))
            .filter(|&(a, b)| a != b && self.count_routes_between(a, b) == 0)
            .collect();
        candidates.shuffle(rng);
        debug!("{} ticket candidate pair(s)", candidates.len());

        candidates.into_iter().find_map(|(src, dst)| {
            let route = self.shortest_route(src, dst)?;
            Some(Ticket {
                src: src.to_string(),
                dst: dst.to_string(),
                goal: route.total_weight(),
                route,
            })
        })
    }
}

/// Result of a successful [`Game::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved along a route costing `cost` cars.
    Moved { cost: u32 },
    /// Moved and reached the ticket's destination.
    Arrived { cost: u32 },
}

/// A player walking from a ticket's source to its destination one route at a
/// time, keeping score in train cars.
#[derive(Clone, Debug)]
pub struct Game {
    ticket: Ticket,
    path: Vec<String>,
    costs: Vec<u32>,
    score: u32,
    complete: bool,
}

impl Game {
    pub fn start(ticket: Ticket) -> Self {
        let path = vec![ticket.src.clone()];
        Self {
            ticket,
            path,
            costs: Vec::new(),
            score: 0,
            complete: false,
        }
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn current(&self) -> &str {
        self.path.last().map_or(self.ticket.src.as_str(), String::as_str)
    }

    pub fn destination(&self) -> &str {
        &self.ticket.dst
    }

    /// Cities visited so far, starting with the ticket source.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn goal(&self) -> u32 {
        self.ticket.goal
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_connected(&self) -> bool {
        self.current() == self.destination()
    }

    /// Cars spent beyond the goal, once the game is complete.
    pub fn overspend(&self) -> Option<u32> {
        self.complete
            .then(|| self.score.saturating_sub(self.ticket.goal))
    }

    /// Travel from the current city to `next` along the first direct route.
    pub fn step(&mut self, board: &Board, next: &str) -> Result<StepOutcome> {
        if self.complete {
            return Err(GraphError::GameOver);
        }
        let cost = board
            .routes_between(self.current(), next)
            .first()
            .map(|edge| edge.label().length)
            .ok_or_else(|| GraphError::NoDirectRoute {
                from: self.current().to_string(),
                to: next.to_string(),
            })?;

        let score = self
            .score
            .checked_add(cost)
            .ok_or_else(|| GraphError::CostOverflow {
                from: self.current().to_string(),
                to: next.to_string(),
            })?;

        self.path.push(next.to_string());
        self.costs.push(cost);
        self.score = score;
        debug!("Moved to {} for {} car(s), score {}", next, cost, self.score);

        if self.is_connected() {
            self.complete = true;
            Ok(StepOutcome::Arrived { cost })
        } else {
            Ok(StepOutcome::Moved { cost })
        }
    }

    /// Take back the last move. Returns the new current city, or `None` when
    /// the game is complete or still at its start.
    pub fn undo(&mut self) -> Option<&str> {
        if self.complete || self.path.len() <= 1 {
            return None;
        }
        self.path.pop();
        let cost = self.costs.pop()?;
        self.score -= cost;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::Point;
    use crate::route::Color;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn line() -> Board {
        let mut board = Board::new();
        for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
            board.add_city(*name, Point::new(i as f64, 0.0)).unwrap();
        }
        board.add_route("A", "B", Route::new(2, Color::Red)).unwrap();
        board.add_route("B", "C", Route::new(3, Color::Blue)).unwrap();
        board.add_route("C", "D", Route::new(1, Color::Gray)).unwrap();
        board
    }

    fn ticket(board: &Board, src: &str, dst: &str) -> Ticket {
        let route = board.shortest_route(src, dst).unwrap();
        Ticket {
            src: src.to_string(),
            dst: dst.to_string(),
            goal: route.total_weight(),
            route,
        }
    }

    #[test]
    fn test_draw_ticket_skips_direct_routes() {
        let board = line();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let ticket = board.draw_ticket(&mut rng).unwrap();
            assert_ne!(ticket.src, ticket.dst);
            assert_eq!(board.count_routes_between(&ticket.src, &ticket.dst), 0);
            assert_eq!(ticket.goal, ticket.route.total_weight());
            assert!(ticket.goal >= 4);
        }
    }

    #[test]
    fn test_draw_ticket_is_seeded() {
        let board = line();
        let a = board.draw_ticket(&mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = board.draw_ticket(&mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!((a.src, a.dst), (b.src, b.dst));
    }

    #[test]
    fn test_draw_ticket_needs_three_cities() {
        let mut board = Board::new();
        board.add_city("A", Point::new(0.0, 0.0)).unwrap();
        board.add_city("B", Point::new(1.0, 0.0)).unwrap();
        assert!(board.draw_ticket(&mut ChaCha8Rng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn test_draw_ticket_none_when_disconnected() {
        let mut board = Board::new();
        for name in ["A", "B", "C"] {
            board.add_city(name, Point::default()).unwrap();
        }
        assert!(board.draw_ticket(&mut ChaCha8Rng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn test_play_to_completion() {
        let board = line();
        let mut game = Game::start(ticket(&board, "A", "D"));
        assert_eq!(game.goal(), 6);
        assert_eq!(game.current(), "A");

        assert_eq!(game.step(&board, "B").unwrap(), StepOutcome::Moved { cost: 2 });
        assert_eq!(game.step(&board, "C").unwrap(), StepOutcome::Moved { cost: 3 });
        assert_eq!(game.overspend(), None);
        assert_eq!(game.step(&board, "D").unwrap(), StepOutcome::Arrived { cost: 1 });

        assert!(game.is_complete());
        assert_eq!(game.score(), 6);
        assert_eq!(game.overspend(), Some(0));
        assert_eq!(game.path(), ["A", "B", "C", "D"]);
        assert!(matches!(game.step(&board, "C"), Err(GraphError::GameOver)));
        assert_eq!(game.undo(), None);
    }

    #[test]
    fn test_step_needs_direct_route() {
        let board = line();
        let mut game = Game::start(ticket(&board, "A", "D"));
        let err = game.step(&board, "C").unwrap_err();
        assert!(matches!(err, GraphError::NoDirectRoute { .. }));
        assert_eq!(game.score(), 0);
        assert_eq!(game.path(), ["A"]);
    }

    #[test]
    fn test_undo_restores_score() {
        let board = line();
        let mut game = Game::start(ticket(&board, "A", "D"));
        assert_eq!(game.undo(), None);

        game.step(&board, "B").unwrap();
        game.step(&board, "A").unwrap();
        game.step(&board, "B").unwrap();
        assert_eq!(game.score(), 6);

        assert_eq!(game.undo(), Some("A"));
        assert_eq!(game.score(), 4);
        assert_eq!(game.undo(), Some("B"));
        assert_eq!(game.score(), 2);
        assert_eq!(game.undo(), Some("A"));
        assert_eq!(game.score(), 0);
        assert_eq!(game.undo(), None);
    }

    #[test]
    fn test_step_refuses_score_overflow() {
        let mut board = Board::new();
        for (i, name) in ["A", "B", "C"].iter().enumerate() {
            board.add_city(*name, Point::new(i as f64, 0.0)).unwrap();
        }
        board
            .add_route("A", "B", Route::new(3_000_000_000, Color::Black))
            .unwrap();
        board.add_route("B", "C", Route::new(1, Color::White)).unwrap();

        let mut game = Game::start(ticket(&board, "A", "C"));
        game.step(&board, "B").unwrap();
        let err = game.step(&board, "A").unwrap_err();

        assert!(matches!(err, GraphError::CostOverflow { .. }));
        assert_eq!(game.current(), "B");
        assert_eq!(game.score(), 3_000_000_000);
        assert_eq!(game.path().len(), 2);
    }
}
