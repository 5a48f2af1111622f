//! Zone access and card list methods.

use tracing::trace;

use super::Evaluator;
use crate::core::entity::EntityId;
use crate::script::ast::{Expr, ListMethod, Token};
use crate::script::error::{RuntimeError, RuntimeErrorKind, SourcePos};
use crate::script::value::Value;
use crate::zones::{CardList, ZoneHandle, ZoneKind};

impl Evaluator<'_> {
    /// `Hand` / `HandOfPlayer(n)` and friends.
    pub(super) fn eval_zone_access(
        &mut self,
        zone: ZoneKind,
        player: Option<&Expr>,
        access: &Token,
    ) -> Result<Value, RuntimeError> {
        let owner = match player {
            None => self.ctx.active_player(),
            Some(arg) => {
                let number = match self.evaluate(arg)? {
                    Value::Number(n) => n,
                    other => {
                        trace!(zone = %zone, found = other.kind(), "rejected player ID");
                        return Err(RuntimeError::new(
                            RuntimeErrorKind::InvalidArgument,
                            "Expect a numeric value as player ID",
                            access.pos,
                        ));
                    }
                };
                // Truncates toward zero; NaN becomes 0, which names nobody.
                let number = number.trunc() as i64;
                self.ctx.player(number).ok_or_else(|| {
                    RuntimeError::new(
                        RuntimeErrorKind::UnknownPlayer,
                        format!("No player with ID {number}"),
                        access.pos,
                    )
                })?
            }
        };

        Ok(Value::CardList(self.ctx.zone(zone, owner)))
    }

    /// `receiver.Method(arg)` on a card list.
    ///
    /// The receiver is checked before the argument is evaluated. Arity comes
    /// from `ListMethod::takes_card`: card methods take exactly one argument,
    /// the rest take none.
    pub(super) fn eval_method(
        &mut self,
        receiver: &Expr,
        method: ListMethod,
        name: &Token,
        arg: Option<&Expr>,
    ) -> Result<Value, RuntimeError> {
        let list = match self.evaluate(receiver)? {
            Value::CardList(list) => list,
            other => {
                trace!(method = %name.lexeme, found = other.kind(), "rejected receiver");
                return Err(RuntimeError::new(
                    RuntimeErrorKind::NotAList,
                    format!("The method '{}' is only accessible from card lists", name.lexeme),
                    name.pos,
                ));
            }
        };
        self.list(list, name.pos)?;

        match (method.takes_card(), arg) {
            (true, Some(arg)) => {
                let card = self.card_argument(arg, name.pos)?;
                self.apply_card_method(list, method, card, name)
            }
            (false, None) => self.apply_list_method(list, method, name),
            (true, None) => Err(RuntimeError::arity(&name.lexeme, 0, name.pos)),
            (false, Some(_)) => Err(RuntimeError::arity(&name.lexeme, 1, name.pos)),
        }
    }

    fn apply_card_method(
        &mut self,
        list: ZoneHandle,
        method: ListMethod,
        card: EntityId,
        name: &Token,
    ) -> Result<Value, RuntimeError> {
        let cards = self.list_mut(list, name.pos)?;
        match method {
            ListMethod::Push => {
                cards.push_front(card);
                trace!(zone = %list, %card, "pushed card to front");
                Ok(Value::CardList(list))
            }

            ListMethod::SendBottom => {
                cards.push_back(card);
                trace!(zone = %list, %card, "sent card to bottom");
                Ok(Value::CardList(list))
            }

            ListMethod::Remove => {
                let removed = match cards.index_of(&card) {
                    Some(index) => {
                        cards.remove(index);
                        true
                    }
                    None => false,
                };
                trace!(zone = %list, %card, removed, "remove");
                Ok(Value::Boolean(removed))
            }

            ListMethod::Pop | ListMethod::Shuffle => {
                Err(RuntimeError::arity(&name.lexeme, 1, name.pos))
            }
        }
    }

    fn apply_list_method(
        &mut self,
        list: ZoneHandle,
        method: ListMethod,
        name: &Token,
    ) -> Result<Value, RuntimeError> {
        match method {
            ListMethod::Pop => {
                let popped = self.list_mut(list, name.pos)?.pop_front();
                let result = popped.map_or(Value::Null, Value::Card);
                trace!(zone = %list, card = ?popped, kind = result.kind(), "popped front card");
                Ok(result)
            }

            ListMethod::Shuffle => {
                let mut order: Vec<EntityId> =
                    self.list(list, name.pos)?.iter().copied().collect();
                self.ctx.rng().shuffle(&mut order);
                *self.list_mut(list, name.pos)? = order.into_iter().collect();
                trace!(zone = %list, "shuffled");
                Ok(Value::CardList(list))
            }

            ListMethod::Push | ListMethod::SendBottom | ListMethod::Remove => {
                Err(RuntimeError::arity(&name.lexeme, 0, name.pos))
            }
        }
    }

    fn card_argument(&mut self, arg: &Expr, pos: SourcePos) -> Result<EntityId, RuntimeError> {
        match self.evaluate(arg)? {
            Value::Card(card) => Ok(card),
            other => {
                trace!(found = other.kind(), "rejected method argument");
                Err(RuntimeError::new(
                    RuntimeErrorKind::InvalidArgument,
                    "Expect a card as method argument",
                    pos,
                ))
            }
        }
    }

    fn list(&self, list: ZoneHandle, pos: SourcePos) -> Result<&CardList, RuntimeError> {
        self.ctx
            .cards(list)
            .ok_or_else(|| RuntimeError::unknown_zone(list, pos))
    }

    fn list_mut(
        &mut self,
        list: ZoneHandle,
        pos: SourcePos,
    ) -> Result<&mut CardList, RuntimeError> {
        self.ctx
            .cards_mut(list)
            .ok_or_else(|| RuntimeError::unknown_zone(list, pos))
    }
}
