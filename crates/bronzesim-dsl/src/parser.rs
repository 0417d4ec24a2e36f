//! Recursive-descent parser for `.bronze` programs.
//!
//! Top level is a sequence of named blocks; unknown blocks and unknown
//! keys are skipped defensively so older programs keep parsing. After
//! each vocation is read, rules pointing at a task that does not exist
//! are repaired: they retarget the vocation's first task, or a
//! synthesized `idle { rest }` task when the vocation has none.

use bronzesim_types::{Cmp, Item, Resource, Season, TerrainTags};
use tracing::debug;

use crate::ast::{
    Condition, InvClause, MAX_INV_CLAUSES, Op, Rule, SimConfig, Task, Vocation,
};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token};

/// Smallest permitted chunk-cache capacity.
const CACHE_MIN: usize = 16;

/// Parse a complete `.bronze` program into a [`SimConfig`].
pub fn parse_str(src: &str) -> Result<SimConfig, ParseError> {
    Parser::new(src).parse()
}

struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    const fn new(src: &'a str) -> Self {
        Self {
            lexer: Lexer::new(src),
        }
    }

    fn next(&mut self) -> Token<'a> {
        self.lexer.next_token()
    }

    fn expect_word(&mut self, context: &'static str) -> Result<&'a str, ParseError> {
        match self.next() {
            Token::Word(w) => Ok(w),
            Token::Eof => Err(ParseError::UnexpectedEof { context }),
            other => Err(ParseError::UnexpectedToken {
                expected: "a word",
                found: other.text().to_owned(),
            }),
        }
    }

    fn expect_lbrace(&mut self, context: &'static str) -> Result<(), ParseError> {
        match self.next() {
            Token::LBrace => Ok(()),
            Token::Eof => Err(ParseError::UnexpectedEof { context }),
            other => Err(ParseError::UnexpectedToken {
                expected: "'{'",
                found: other.text().to_owned(),
            }),
        }
    }

    /// Skip a balanced `{ ... }` body whose opening brace was consumed.
    fn skip_block_body(&mut self) {
        let mut depth = 1_u32;
        while depth > 0 {
            match self.next() {
                Token::LBrace => depth = depth.saturating_add(1),
                Token::RBrace => depth = depth.saturating_sub(1),
                Token::Eof => return,
                Token::Word(_) => {}
            }
        }
    }

    /// Skip an unknown construct: a whole block if one follows, else the
    /// single value token.
    fn skip_unknown(&mut self) {
        if self.next() == Token::LBrace {
            self.skip_block_body();
        }
    }

    fn parse(mut self) -> Result<SimConfig, ParseError> {
        let mut cfg = SimConfig::default();
        loop {
            match self.next() {
                Token::Eof => break,
                Token::Word("world") => self.parse_world_block(&mut cfg)?,
                Token::Word("sim") => self.parse_sim_block(&mut cfg)?,
                Token::Word("agents") => {
                    cfg.agent_count = self.parse_count_block("agents", cfg.agent_count)?;
                }
                Token::Word("settlements") => {
                    cfg.settlement_count =
                        self.parse_count_block("settlements", cfg.settlement_count)?;
                }
                Token::Word("resources") => self.parse_resources_block(&mut cfg)?,
                Token::Word("vocations") => self.parse_vocations_block(&mut cfg)?,
                Token::Word(other) => {
                    debug!(block = other, "skipping unknown top-level block");
                    self.skip_unknown();
                }
                Token::LBrace | Token::RBrace => {}
            }
        }
        Ok(cfg)
    }

    fn parse_world_block(&mut self, cfg: &mut SimConfig) -> Result<(), ParseError> {
        self.expect_lbrace("world block")?;
        loop {
            let key = match self.next() {
                Token::RBrace => return Ok(()),
                Token::Eof => return Err(ParseError::UnexpectedEof { context: "world block" }),
                Token::LBrace => continue,
                Token::Word(w) => w,
            };
            let value = self.expect_word("world key value")?;
            match key {
                "seed" => cfg.seed = parse_u32(value)?,
                "days" => cfg.days = parse_i32(value)?,
                "cache_max" => cfg.cache_max = parse_cache_max(value)?,
                "snapshot_every" => cfg.snapshot_every_days = parse_i32(value)?,
                "map_every" => cfg.map_every_days = parse_i32(value)?,
                "agents" => cfg.agent_count = parse_i32(value)?.max(1).unsigned_abs(),
                "settlements" => cfg.settlement_count = parse_i32(value)?.max(1).unsigned_abs(),
                other => debug!(key = other, "ignoring unknown world key"),
            }
        }
    }

    fn parse_sim_block(&mut self, cfg: &mut SimConfig) -> Result<(), ParseError> {
        self.expect_lbrace("sim block")?;
        loop {
            let key = match self.next() {
                Token::RBrace => return Ok(()),
                Token::Eof => return Err(ParseError::UnexpectedEof { context: "sim block" }),
                Token::LBrace => continue,
                Token::Word(w) => w,
            };
            let value = self.expect_word("sim key value")?;
            match key {
                "days" => cfg.days = parse_i32(value)?,
                "cache_max" => cfg.cache_max = parse_cache_max(value)?,
                "snapshot_every" => cfg.snapshot_every_days = parse_i32(value)?,
                "map_every" => cfg.map_every_days = parse_i32(value)?,
                other => debug!(key = other, "ignoring unknown sim key"),
            }
        }
    }

    fn parse_count_block(
        &mut self,
        context: &'static str,
        default: u32,
    ) -> Result<u32, ParseError> {
        self.expect_lbrace(context)?;
        let mut count = default;
        loop {
            let key = match self.next() {
                Token::RBrace => return Ok(count),
                Token::Eof => return Err(ParseError::UnexpectedEof { context }),
                Token::LBrace => continue,
                Token::Word(w) => w,
            };
            let value = self.expect_word("count value")?;
            if key == "count" {
                count = parse_i32(value)?.max(1).unsigned_abs();
            }
        }
    }

    fn parse_resources_block(&mut self, cfg: &mut SimConfig) -> Result<(), ParseError> {
        self.expect_lbrace("resources block")?;
        loop {
            let key = match self.next() {
                Token::RBrace => return Ok(()),
                Token::Eof => {
                    return Err(ParseError::UnexpectedEof { context: "resources block" });
                }
                Token::LBrace => continue,
                Token::Word(w) => w,
            };
            let value = self.expect_word("resource rate value")?;
            let rate = parse_f32(value)?;
            let renewed = key
                .strip_suffix("_renew")
                .and_then(Resource::from_name)
                .and_then(|resource| cfg.renew.get_mut(resource.index()));
            match renewed {
                Some(slot) => *slot = rate,
                None => debug!(key, "ignoring unknown resource key"),
            }
        }
    }

    fn parse_vocations_block(&mut self, cfg: &mut SimConfig) -> Result<(), ParseError> {
        self.expect_lbrace("vocations block")?;
        loop {
            match self.next() {
                Token::RBrace => return Ok(()),
                Token::Eof => {
                    return Err(ParseError::UnexpectedEof { context: "vocations block" });
                }
                Token::Word("vocation") => {
                    let vocation = self.parse_vocation()?;
                    cfg.vocations.vocations.push(vocation);
                }
                other => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "'vocation'",
                        found: other.text().to_owned(),
                    });
                }
            }
        }
    }

    fn parse_vocation(&mut self) -> Result<Vocation, ParseError> {
        let name = self.expect_word("vocation name")?.to_owned();
        let mut vocation = Vocation {
            name,
            ..Vocation::default()
        };
        self.expect_lbrace("vocation body")?;
        loop {
            match self.next() {
                Token::RBrace => break,
                Token::Eof => {
                    return Err(ParseError::UnexpectedEof { context: "vocation body" });
                }
                Token::Word("task") => {
                    let task = self.parse_task()?;
                    vocation.tasks.push(task);
                }
                Token::Word("rule") => {
                    let rule = self.parse_rule()?;
                    vocation.rules.push(rule);
                }
                Token::Word(other) => {
                    debug!(keyword = other, vocation = vocation.name, "skipping unknown keyword");
                    self.skip_unknown();
                }
                Token::LBrace => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "a keyword in vocation body",
                        found: "{".to_owned(),
                    });
                }
            }
        }
        repair_rules(&mut vocation);
        Ok(vocation)
    }

    fn parse_task(&mut self) -> Result<Task, ParseError> {
        let name = self.expect_word("task name")?.to_owned();
        self.expect_lbrace("task body")?;
        let mut ops = Vec::new();
        loop {
            let op = match self.next() {
                Token::RBrace => break,
                Token::Eof => return Err(ParseError::UnexpectedEof { context: "task body" }),
                Token::LBrace => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "an op name",
                        found: "{".to_owned(),
                    });
                }
                Token::Word(w) => w,
            };
            match op {
                "move_to" => {
                    let tag_name = self.expect_word("move_to tag")?;
                    let tag = TerrainTags::from_name(tag_name).ok_or_else(|| {
                        ParseError::UnknownName {
                            kind: "tag",
                            name: tag_name.to_owned(),
                        }
                    })?;
                    ops.push(Op::MoveTo(tag));
                }
                "gather" => {
                    let res_name = self.expect_word("gather resource")?;
                    let resource = Resource::from_name(res_name).ok_or_else(|| {
                        ParseError::UnknownName {
                            kind: "resource",
                            name: res_name.to_owned(),
                        }
                    })?;
                    let amount = parse_amount(self.expect_word("gather amount")?)?;
                    ops.push(Op::Gather { resource, amount });
                }
                "craft" => {
                    let item_name = self.expect_word("craft item")?;
                    let item = Item::from_name(item_name).ok_or_else(|| {
                        ParseError::UnknownName {
                            kind: "item",
                            name: item_name.to_owned(),
                        }
                    })?;
                    let amount = parse_amount(self.expect_word("craft amount")?)?;
                    ops.push(Op::Craft { item, amount });
                }
                "trade" => ops.push(Op::Trade),
                "rest" => ops.push(Op::Rest),
                "roam" => {
                    let steps = parse_amount(self.expect_word("roam steps")?)?;
                    ops.push(Op::Roam(steps));
                }
                other => {
                    return Err(ParseError::UnknownOp {
                        name: other.to_owned(),
                        task: name,
                    });
                }
            }
        }
        Ok(Task { name, ops })
    }

    fn parse_rule(&mut self) -> Result<Rule, ParseError> {
        let name = self.expect_word("rule name")?.to_owned();
        self.expect_lbrace("rule body")?;

        let when = self.expect_word("rule body")?;
        if when != "when" {
            return Err(ParseError::UnexpectedToken {
                expected: "'when'",
                found: when.to_owned(),
            });
        }

        // parse_condition consumes the trailing 'do'.
        let mut condition = self.parse_condition()?;
        let task_name = self.expect_word("rule task name")?.to_owned();

        let weight_kw = self.expect_word("rule weight")?;
        if weight_kw != "weight" {
            return Err(ParseError::UnexpectedToken {
                expected: "'weight'",
                found: weight_kw.to_owned(),
            });
        }
        let weight = parse_i32(self.expect_word("weight value")?)?;

        // Optional trailing "prob P" overrides any prob inside the condition.
        let mut tail = self.next();
        if tail == Token::Word("prob") {
            let p = parse_f32(self.expect_word("prob value")?)?;
            condition.prob = Some(p.clamp(0.0, 1.0));
            tail = self.next();
        }

        if tail != Token::RBrace {
            return Err(ParseError::UnexpectedToken {
                expected: "'}' to end rule block",
                found: tail.text().to_owned(),
            });
        }

        Ok(Rule {
            name,
            condition,
            task_name,
            weight,
        })
    }

    fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        let mut condition = Condition::default();
        loop {
            let clause = self.expect_word("condition clause")?;
            match clause {
                "hunger" => {
                    let op = self.expect_word("hunger comparator")?;
                    let value = parse_f32(self.expect_word("hunger value")?)?;
                    if op != ">" {
                        return Err(ParseError::UnsupportedComparator {
                            clause: "hunger",
                            allowed: ">",
                            found: op.to_owned(),
                        });
                    }
                    condition.hunger_above = Some(value);
                }
                "fatigue" => {
                    let op = self.expect_word("fatigue comparator")?;
                    let value = parse_f32(self.expect_word("fatigue value")?)?;
                    if op != "<" {
                        return Err(ParseError::UnsupportedComparator {
                            clause: "fatigue",
                            allowed: "<",
                            found: op.to_owned(),
                        });
                    }
                    condition.fatigue_below = Some(value);
                }
                "season" => {
                    let op = self.expect_word("season comparator")?;
                    let value = self.expect_word("season name")?;
                    if op != "==" {
                        return Err(ParseError::UnsupportedComparator {
                            clause: "season",
                            allowed: "==",
                            found: op.to_owned(),
                        });
                    }
                    // Unknown season names (including "any") impose no gate.
                    condition.season = Season::from_name(value);
                }
                "inv" => {
                    let item_name = self.expect_word("inv item")?;
                    let op = self.expect_word("inv comparator")?;
                    let value = parse_i32(self.expect_word("inv value")?)?;
                    let item = Item::from_name(item_name).ok_or_else(|| {
                        ParseError::UnknownName {
                            kind: "item",
                            name: item_name.to_owned(),
                        }
                    })?;
                    let cmp = Cmp::from_symbol(op).ok_or_else(|| ParseError::UnknownComparator {
                        symbol: op.to_owned(),
                    })?;
                    if condition.inventory.len() >= MAX_INV_CLAUSES {
                        return Err(ParseError::TooManyInvClauses { max: MAX_INV_CLAUSES });
                    }
                    condition.inventory.push(InvClause { item, cmp, value });
                }
                "prob" => {
                    let p = parse_f32(self.expect_word("prob value")?)?;
                    condition.prob = Some(p.clamp(0.0, 1.0));
                }
                other => {
                    return Err(ParseError::UnknownClause {
                        name: other.to_owned(),
                    });
                }
            }

            match self.next() {
                Token::Word("and") => {}
                Token::Word("do") => return Ok(condition),
                other => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "'and' or 'do' after condition",
                        found: other.text().to_owned(),
                    });
                }
            }
        }
    }
}

/// Retarget rules whose task does not exist: first task if the vocation
/// has one, else a synthesized `idle { rest }` task.
fn repair_rules(vocation: &mut Vocation) {
    if vocation.rules.is_empty() {
        return;
    }
    for i in 0..vocation.rules.len() {
        let missing = vocation
            .rules
            .get(i)
            .is_some_and(|r| vocation.tasks.iter().all(|t| t.name != r.task_name));
        if !missing {
            continue;
        }
        if vocation.tasks.is_empty() {
            vocation.tasks.push(Task {
                name: "idle".to_owned(),
                ops: vec![Op::Rest],
            });
        }
        let first = vocation.tasks.first().map(|t| t.name.clone());
        if let (Some(rule), Some(task_name)) = (vocation.rules.get_mut(i), first) {
            rule.task_name = task_name;
        }
    }
}

fn parse_i32(text: &str) -> Result<i32, ParseError> {
    text.parse().map_err(|_err| ParseError::InvalidNumber {
        text: text.to_owned(),
    })
}

/// Unsigned 32-bit parse with the original's clamp: negatives become 0.
fn parse_u32(text: &str) -> Result<u32, ParseError> {
    let value: i64 = text.parse().map_err(|_err| ParseError::InvalidNumber {
        text: text.to_owned(),
    })?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok((value.max(0) & 0xFFFF_FFFF) as u32)
}

fn parse_f32(text: &str) -> Result<f32, ParseError> {
    text.parse().map_err(|_err| ParseError::InvalidNumber {
        text: text.to_owned(),
    })
}

/// Op amounts are non-negative; negative literals clamp to 0.
fn parse_amount(text: &str) -> Result<u32, ParseError> {
    Ok(parse_i32(text)?.max(0).unsigned_abs())
}

fn parse_cache_max(text: &str) -> Result<usize, ParseError> {
    let value = parse_i32(text)?;
    Ok(usize::try_from(value.max(0)).unwrap_or(0).max(CACHE_MIN))
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse_ok(src: &str) -> SimConfig {
        parse_str(src).unwrap()
    }

    #[test]
    fn empty_program_yields_defaults() {
        let cfg = parse_ok("");
        assert_eq!(cfg, SimConfig::default());
    }

    #[test]
    fn world_block_sets_scalars() {
        let cfg = parse_ok(
            "world { seed 42 days 30 agents 10 settlements 2 \
             cache_max 64 snapshot_every 5 map_every 7 }",
        );
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.days, 30);
        assert_eq!(cfg.agent_count, 10);
        assert_eq!(cfg.settlement_count, 2);
        assert_eq!(cfg.cache_max, 64);
        assert_eq!(cfg.snapshot_every_days, 5);
        assert_eq!(cfg.map_every_days, 7);
    }

    #[test]
    fn cache_max_floors_at_sixteen() {
        let cfg = parse_ok("world { cache_max 3 }");
        assert_eq!(cfg.cache_max, 16);
    }

    #[test]
    fn counts_floor_at_one() {
        let cfg = parse_ok("agents { count 0 } settlements { count -5 }");
        assert_eq!(cfg.agent_count, 1);
        assert_eq!(cfg.settlement_count, 1);
    }

    #[test]
    fn sim_block_overrides_world_block() {
        let cfg = parse_ok("world { days 100 } sim { days 7 }");
        assert_eq!(cfg.days, 7);
    }

    #[test]
    fn unknown_world_keys_consume_one_value() {
        let cfg = parse_ok("world { gravity 9.8 seed 5 }");
        assert_eq!(cfg.seed, 5);
    }

    #[test]
    fn unknown_top_level_blocks_are_skipped() {
        let cfg = parse_ok("climate { humid { very true } } world { seed 9 }");
        assert_eq!(cfg.seed, 9);
    }

    #[test]
    fn resource_rates_parse_by_suffix() {
        let cfg = parse_ok("resources { fish_renew 0.5 tribalism_renew 0.25 unobtainium_renew 9 }");
        assert!((cfg.renew[Resource::Fish.index()] - 0.5).abs() < f32::EPSILON);
        assert!((cfg.renew[Resource::Tribalism.index()] - 0.25).abs() < f32::EPSILON);
        // Unknown key left every other rate at its default.
        assert!((cfg.renew[Resource::Wood.index()] - 0.03).abs() < f32::EPSILON);
    }

    #[test]
    fn vocation_with_tasks_and_rules() {
        let cfg = parse_ok(
            "vocations { vocation fisher {\n\
               task fishing { move_to coast gather fish 5 rest }\n\
               rule go { when hunger > 0.5 and season == winter do fishing weight 10 }\n\
             } }",
        );
        assert_eq!(cfg.vocations.vocations.len(), 1);
        let voc = &cfg.vocations.vocations[0];
        assert_eq!(voc.name, "fisher");
        assert_eq!(voc.tasks.len(), 1);
        assert_eq!(
            voc.tasks[0].ops,
            vec![
                Op::MoveTo(TerrainTags::COAST),
                Op::Gather {
                    resource: Resource::Fish,
                    amount: 5
                },
                Op::Rest,
            ]
        );
        let rule = &voc.rules[0];
        assert_eq!(rule.task_name, "fishing");
        assert_eq!(rule.weight, 10);
        assert_eq!(rule.condition.hunger_above, Some(0.5));
        assert_eq!(rule.condition.season, Some(Season::Winter));
    }

    #[test]
    fn trailing_prob_clamps_and_overrides() {
        let cfg = parse_ok(
            "vocations { vocation v {\n\
               task t { rest }\n\
               rule r { when prob 0.2 do t weight 1 prob 3.5 }\n\
             } }",
        );
        assert_eq!(cfg.vocations.vocations[0].rules[0].condition.prob, Some(1.0));
    }

    #[test]
    fn inv_clauses_parse_all_comparators() {
        let cfg = parse_ok(
            "vocations { vocation v {\n\
               task t { rest }\n\
               rule r { when inv tool >= 1 and inv fish < 3 and inv pot <= 2 and inv wood > 0 \
                        do t weight 1 }\n\
             } }",
        );
        let cond = &cfg.vocations.vocations[0].rules[0].condition;
        assert_eq!(cond.inventory.len(), 4);
        assert_eq!(cond.inventory[0].cmp, Cmp::Ge);
        assert_eq!(cond.inventory[1].cmp, Cmp::Lt);
        assert_eq!(cond.inventory[2].cmp, Cmp::Le);
        assert_eq!(cond.inventory[3].cmp, Cmp::Gt);
    }

    #[test]
    fn fifth_inv_clause_is_rejected() {
        let result = parse_str(
            "vocations { vocation v { task t { rest } rule r { \
             when inv tool > 0 and inv fish > 0 and inv pot > 0 and inv wood > 0 \
             and inv clay > 0 do t weight 1 } } }",
        );
        assert!(matches!(result, Err(ParseError::TooManyInvClauses { max: 4 })));
    }

    #[test]
    fn hunger_only_supports_greater_than() {
        let result = parse_str(
            "vocations { vocation v { task t { rest } \
             rule r { when hunger < 0.5 do t weight 1 } } }",
        );
        assert!(matches!(
            result,
            Err(ParseError::UnsupportedComparator { clause: "hunger", .. })
        ));
    }

    #[test]
    fn unknown_gather_resource_is_fatal() {
        let result =
            parse_str("vocations { vocation v { task t { gather mithril 3 } } }");
        assert!(matches!(
            result,
            Err(ParseError::UnknownName { kind: "resource", .. })
        ));
    }

    #[test]
    fn unknown_op_is_fatal() {
        let result = parse_str("vocations { vocation v { task t { sing 3 } } }");
        assert!(matches!(result, Err(ParseError::UnknownOp { .. })));
    }

    #[test]
    fn dangling_rule_retargets_first_task() {
        let cfg = parse_ok(
            "vocations { vocation v {\n\
               task real { rest }\n\
               rule r { when prob 1.0 do ghost weight 1 }\n\
             } }",
        );
        assert_eq!(cfg.vocations.vocations[0].rules[0].task_name, "real");
    }

    #[test]
    fn dangling_rule_without_tasks_synthesizes_idle() {
        let cfg = parse_ok(
            "vocations { vocation v { rule r { when prob 1.0 do ghost weight 1 } } }",
        );
        let voc = &cfg.vocations.vocations[0];
        assert_eq!(voc.tasks.len(), 1);
        assert_eq!(voc.tasks[0].name, "idle");
        assert_eq!(voc.tasks[0].ops, vec![Op::Rest]);
        assert_eq!(voc.rules[0].task_name, "idle");
    }

    #[test]
    fn settlement_and_fall_aliases() {
        let cfg = parse_ok(
            "vocations { vocation v {\n\
               task t { move_to settlement }\n\
               rule r { when season == fall do t weight 1 }\n\
             } }",
        );
        let voc = &cfg.vocations.vocations[0];
        assert_eq!(voc.tasks[0].ops, vec![Op::MoveTo(TerrainTags::SETTLE)]);
        assert_eq!(voc.rules[0].condition.season, Some(Season::Autumn));
    }

    #[test]
    fn unknown_season_imposes_no_gate() {
        let cfg = parse_ok(
            "vocations { vocation v { task t { rest } \
             rule r { when season == any do t weight 1 } } }",
        );
        assert_eq!(cfg.vocations.vocations[0].rules[0].condition.season, None);
    }

    #[test]
    fn unknown_vocation_keywords_are_skipped() {
        let cfg = parse_ok(
            "vocations { vocation v {\n\
               motto humble\n\
               lore { deep { nested } words }\n\
               task t { rest }\n\
             } }",
        );
        assert_eq!(cfg.vocations.vocations[0].tasks.len(), 1);
    }

    #[test]
    fn negative_amounts_clamp_to_zero() {
        let cfg = parse_ok("vocations { vocation v { task t { gather fish -4 roam -9 } } }");
        assert_eq!(
            cfg.vocations.vocations[0].tasks[0].ops,
            vec![
                Op::Gather {
                    resource: Resource::Fish,
                    amount: 0
                },
                Op::Roam(0),
            ]
        );
    }

    #[test]
    fn truncated_source_is_fatal() {
        assert!(matches!(
            parse_str("world { seed"),
            Err(ParseError::UnexpectedEof { .. })
        ));
        assert!(matches!(
            parse_str("vocations { vocation v { task t { rest }"),
            Err(ParseError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn comments_are_transparent() {
        let cfg = parse_ok(
            "# stock world\n\
             world {\n\
               seed 7 // inline\n\
               days 3\n\
             }",
        );
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.days, 3);
    }
}
