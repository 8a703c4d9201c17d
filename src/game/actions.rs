use log::debug;

use crate::error::ActionError;
use crate::result::{ActionOutcome, ActionReport};

use super::{Game, GameState};

/// The draw command. Matched exactly; `Pick` is not a command.
const PICK_COMMAND: &str = "pick";

/// Prefix of the counted draw command, as in `pick-3`.
const PICK_PREFIX: &str = "pick-";

/// Letters a card code may end in. `O` stays so the joker code `JO` is
/// recognized alongside the four suits.
const SUIT_LETTERS: [char; 5] = ['C', 'D', 'H', 'S', 'O'];

/// Prefixes a card code may carry before its final letter, the empty
/// prefix included.
const RANK_PREFIXES: [&str; 14] = [
    "", "A", "K", "Q", "J", "10", "2", "3", "4", "5", "6", "7", "8", "9",
];

/// Returns whether a token looks like a card code and deserves a placement
/// attempt. Anything starting with `10` qualifies outright.
fn is_card_code(token: &str) -> bool {
    if token.starts_with("10") {
        return true;
    }
    let Some(last) = token.chars().last() else {
        return false;
    };
    if !SUIT_LETTERS.contains(&last.to_ascii_uppercase()) {
        return false;
    }
    let prefix = &token[..token.len() - last.len_utf8()];
    RANK_PREFIXES
        .iter()
        .any(|p| p.eq_ignore_ascii_case(prefix))
}

impl Game {
    /// Applies one line of input for the player in seat `player_id`.
    ///
    /// The line splits on whitespace into commands. `pick` draws one card,
    /// `pick-3` draws three, and anything else is treated as a comma list of
    /// card codes to place, attempted left to right. Tokens that are neither
    /// a draw command nor a plausible card code are skipped, as are codes
    /// naming cards the player does not hold.
    ///
    /// The turn passes to the next seat when any command drew a card or had
    /// a placement accepted; a line of nothing but rejected placements
    /// leaves the turn where it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, the seat is unknown
    /// or not the current one, no part of the input was recognizable, or the
    /// pack ran out mid-draw. A failed draw keeps the cards drawn before the
    /// pack ran out.
    pub fn process_action(
        &mut self,
        player_id: u8,
        input: &str,
    ) -> Result<ActionReport, ActionError> {
        if self.state != GameState::InProgress {
            return Err(ActionError::InvalidState);
        }
        let seat = self
            .players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or(ActionError::PlayerNotFound)?;
        if seat != self.current {
            return Err(ActionError::NotYourTurn);
        }

        let mut outcomes = Vec::new();
        for token in input.split_whitespace() {
            if let Some(outcome) = self.apply_token(seat, token)? {
                outcomes.push(outcome);
            }
        }
        if outcomes.is_empty() {
            return Err(ActionError::Unrecognized);
        }

        let consumed = outcomes.iter().any(|o| o.consumes_turn());
        if consumed {
            self.round += 1;
            self.current = (self.current + 1) % self.players.len();
            debug!("turn passes to seat index {}", self.current);
        }

        Ok(ActionReport { outcomes, consumed })
    }

    /// Runs a single whitespace-separated token. Returns `None` for tokens
    /// that produced no outcome.
    fn apply_token(
        &mut self,
        seat: usize,
        token: &str,
    ) -> Result<Option<ActionOutcome>, ActionError> {
        if token == PICK_COMMAND {
            return self.pick(seat, 1).map(Some);
        }
        if let Some(rest) = token.strip_prefix(PICK_PREFIX) {
            // usize parsing accepts a leading sign; the count is digits only
            if !rest.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(None);
            }
            return match rest.parse::<usize>() {
                Ok(count) if count > 0 => self.pick(seat, count).map(Some),
                _ => Ok(None),
            };
        }
        self.place_codes(seat, token)
    }

    /// Draws `requested` cards from the pack into the seat's hand.
    fn pick(&mut self, seat: usize, requested: usize) -> Result<ActionOutcome, ActionError> {
        let player = &mut self.players[seat];
        let before = player.count();
        player
            .draw_from(&mut self.pack, requested)
            .map_err(|_| ActionError::PackExhausted {
                drawn: player.count() - before,
                requested,
            })?;
        debug!("seat {} drew {requested} from the pack", player.id());
        Ok(ActionOutcome::Picked(requested))
    }

    /// Attempts every held card named in a comma list of codes. The token's
    /// outcome carries the verdict of the first attempt; later codes are
    /// still attempted against whatever the earlier ones left on top.
    fn place_codes(
        &mut self,
        seat: usize,
        token: &str,
    ) -> Result<Option<ActionOutcome>, ActionError> {
        let mut verdict = None;
        for code in token.split(',') {
            if !is_card_code(code) {
                continue;
            }
            let Some(card) = self.players[seat].find_by_code(code) else {
                continue;
            };
            let placement = self
                .stage
                .try_place(card, &mut self.players[seat])
                .map_err(|_| ActionError::InvalidState)?;
            debug!("seat {} played {card}: {placement:?}", self.players[seat].id());
            if verdict.is_none() {
                verdict = Some(placement);
            }
        }
        Ok(verdict.map(ActionOutcome::Placed))
    }
}
