use std::collections::HashSet;

use super::AutomatonSession;

/// Click-and-drag painting.
/// Each cell is toggled at most once per drag, however long the pointer
/// lingers on it or however often it re-enters.
#[derive(Debug, Default)]
pub struct DragPainter {
    visited: Option<HashSet<(usize, usize)>>,
}

impl DragPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.visited.is_some()
    }

    /// Pointer pressed on (i, j): start a drag and toggle that cell
    pub fn press(&mut self, session: &mut AutomatonSession, i: usize, j: usize) {
        self.visited = Some(HashSet::new());
        self.hover(session, i, j);
    }

    /// Pointer moved over (i, j). Toggles the cell if a drag is active and
    /// this drag has not touched it yet.
    pub fn hover(&mut self, session: &mut AutomatonSession, i: usize, j: usize) {
        let Some(visited) = self.visited.as_mut() else {
            return;
        };
        if !visited.insert((i, j)) {
            return;
        }
        if let Err(err) = session.edit(i, j) {
            log::warn!("Ignoring paint outside the grid: {err}");
        }
    }

    /// Pointer released or left the grid
    pub fn release(&mut self) {
        self.visited = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SessionConfig;
    use crate::domain::Automaton;

    fn life(rows: usize, cols: usize) -> AutomatonSession {
        AutomatonSession::new(SessionConfig { automaton: Automaton::GameOfLife, rows, cols }).unwrap()
    }

    #[test]
    fn test_hover_without_press_does_nothing() {
        let mut session = life(3, 3);
        let mut painter = DragPainter::new();
        painter.hover(&mut session, 1, 1);
        assert_eq!(session.grid().count(1), 0);
        assert!(!painter.is_dragging());
    }

    #[test]
    fn test_each_cell_toggled_once_per_drag() {
        let mut session = life(3, 3);
        let mut painter = DragPainter::new();
        painter.press(&mut session, 0, 0);
        painter.hover(&mut session, 0, 0);
        painter.hover(&mut session, 0, 1);
        painter.hover(&mut session, 0, 0);
        assert_eq!(session.state_at(0, 0), Some(1));
        assert_eq!(session.state_at(0, 1), Some(1));
    }

    #[test]
    fn test_diagonal_drag_toggles_every_cell() {
        let mut session = life(4, 4);
        let mut painter = DragPainter::new();
        painter.press(&mut session, 0, 0);
        for k in 1..4 {
            painter.hover(&mut session, k, k);
        }
        painter.release();
        assert!((0..4).all(|k| session.state_at(k, k) == Some(1)));
        assert_eq!(session.grid().count(1), 4);
    }

    #[test]
    fn test_new_drag_can_toggle_again() {
        let mut session = life(2, 2);
        let mut painter = DragPainter::new();
        painter.press(&mut session, 1, 1);
        painter.release();
        painter.press(&mut session, 1, 1);
        assert_eq!(session.state_at(1, 1), Some(0));
    }

    #[test]
    fn test_press_and_release_track_drag() {
        let mut session = life(2, 2);
        let mut painter = DragPainter::new();
        painter.press(&mut session, 0, 1);
        assert!(painter.is_dragging());
        painter.release();
        assert!(!painter.is_dragging());
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut session = life(2, 2);
        let mut painter = DragPainter::new();
        painter.press(&mut session, 5, 5);
        assert_eq!(session.grid().count(0), 4);
    }
}
