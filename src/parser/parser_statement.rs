//statement forms: declaration, assignment, print, IF and DO,
//dispatch happens on the token kind under the cursor

use crate::ast::{Operand, PrintItem, PrintStatement, Statement};
use crate::lexer_tokenizer::{Token, TokenKind, TokenValue};
use crate::parser::{parser_error::ParseError, parser_kernel::Parser};
use tracing::trace;

impl<'a> Parser<'a> {
    /// Parses whatever starts at the cursor. Unrecognized tokens (and the
    /// newlines that separate statements) are skipped without a node.
    pub fn parse_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        let Some(token) = self.current() else {
            return Ok(None);
        };
        trace!(pos = self.pos, kind = %token.kind, line = token.line, "statement dispatch");

        match token.kind {
            TokenKind::Integer => self.parse_declaration(),
            TokenKind::Id => self.parse_assignment(),
            TokenKind::Print => Ok(Some(Statement::Print(self.parse_print()?))),
            TokenKind::If => self.parse_conditional().map(Some),
            TokenKind::Do => self.parse_loop().map(Some),
            _ => {
                self.advance();
                Ok(None)
            }
        }
    }

    // INTEGER :: name
    fn parse_declaration(&mut self) -> Result<Option<Statement>, ParseError> {
        let start = self.pos;
        let marker = self.require(start + 1, "ERR-SYN-001", "expected `::` after INTEGER")?;
        if marker.kind != TokenKind::DoubleColon {
            self.pos = start + 2;
            return Ok(None);
        }

        let name = self.require(
            start + 2,
            "ERR-SYN-002",
            "expected a variable name after `INTEGER ::`",
        )?;
        self.pos = start + 3;
        if name.kind != TokenKind::Id {
            return Ok(None);
        }
        Ok(Some(Statement::Declaration {
            variable: name.text(),
        }))
    }

    // name = value, where value is exactly one token
    fn parse_assignment(&mut self) -> Result<Option<Statement>, ParseError> {
        let start = self.pos;
        let variable = self.tokens[start].text();

        match self.tokens.get(start + 1) {
            Some(next) if next.kind == TokenKind::Assign => {
                let value = self.require(start + 2, "ERR-SYN-003", "expected a value after `=`")?;
                self.pos = start + 3;
                Ok(Some(Statement::Assignment {
                    variable,
                    value: operand(value),
                }))
            }
            _ => {
                // a bare identifier is dropped along with the token after it
                self.pos = start + 2;
                Ok(None)
            }
        }
    }

    /// `PRINT *, a, b, ...` up to (not including) the end of the line.
    pub fn parse_print(&mut self) -> Result<PrintStatement, ParseError> {
        self.advance();
        if self.current_kind() == Some(TokenKind::Asterisk) {
            self.advance();
        }
        if self.current_kind() == Some(TokenKind::Comma) {
            self.advance();
        }

        let mut values = Vec::new();
        while let Some(token) = self.current() {
            match token.kind {
                TokenKind::Newline => break,
                TokenKind::Comma => {}
                TokenKind::String => values.push(PrintItem::StringLiteral(token.text())),
                TokenKind::Id => values.push(PrintItem::VariableReference(token.text())),
                _ => values.push(PrintItem::RawLiteral(token.text())),
            }
            self.advance();
        }
        Ok(PrintStatement { values })
    }

    fn parse_conditional(&mut self) -> Result<Statement, ParseError> {
        let opener = self.pos;
        let line = self.tokens[opener].line;
        self.advance();

        let missing_then = format!("IF on line {} has no THEN", line);
        let mut condition = Vec::new();
        loop {
            let token = self.require(self.pos, "ERR-SYN-004", &missing_then)?;
            match token.kind {
                TokenKind::Then => break,
                TokenKind::Newline => {}
                _ => condition.push(token.source_text()),
            }
            self.advance();
        }
        self.advance();

        let then_branch = self.parse_print_block(
            TokenKind::EndIf,
            "ERR-SYN-005",
            &format!("IF block opened on line {} is never closed with END IF", line),
        )?;
        Ok(Statement::Conditional {
            condition: condition.join(" "),
            then_branch,
        })
    }

    // DO var = start, end  -- bounds are read at fixed offsets
    fn parse_loop(&mut self) -> Result<Statement, ParseError> {
        let opener = self.pos;
        let line = self.tokens[opener].line;

        let variable = self.require(opener + 1, "ERR-SYN-006", "expected a loop variable after DO")?;
        let start = self.require(opener + 3, "ERR-SYN-007", "expected the loop start value")?;
        let end = self.require(opener + 5, "ERR-SYN-008", "expected the loop end value")?;
        self.pos = opener + 6;

        let body = self.parse_print_block(
            TokenKind::EndDo,
            "ERR-SYN-009",
            &format!("DO block opened on line {} is never closed with END DO", line),
        )?;
        Ok(Statement::Loop {
            variable: variable.text(),
            start: operand(start),
            end: operand(end),
            body,
        })
    }

    /// Body of IF / DO: collects PRINT statements, steps over anything else one
    /// token at a time, and consumes the terminator.
    fn parse_print_block(
        &mut self,
        terminator: TokenKind,
        code: &'static str,
        message: &str,
    ) -> Result<Vec<PrintStatement>, ParseError> {
        let mut body = Vec::new();
        loop {
            let token = self.require(self.pos, code, message)?;
            if token.kind == terminator {
                self.advance();
                return Ok(body);
            }
            if token.kind == TokenKind::Print {
                body.push(self.parse_print()?);
            } else {
                self.advance();
            }
        }
    }
}

fn operand(token: &Token) -> Operand {
    match (&token.kind, &token.value) {
        (_, TokenValue::Number(number)) => Operand::Number(*number),
        (TokenKind::Id, _) => Operand::Identifier(token.text()),
        (TokenKind::String, _) => Operand::Str(token.text()),
        _ => Operand::Raw(token.text()),
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Operand, PrintItem, PrintStatement, Statement};
    use crate::lexer_tokenizer::{Number, tokenize};
    use crate::parser::parse;

    fn statements(source: &str) -> Vec<Statement> {
        let tokens = tokenize(source).unwrap();
        parse(&tokens).unwrap().statements
    }

    fn print_of(items: Vec<PrintItem>) -> PrintStatement {
        PrintStatement { values: items }
    }

    #[test]
    fn sample_program_shape() {
        let program = statements(
            "INTEGER :: X\nX = 5\nPRINT *, \"Value:\", X\nIF X == 5 THEN\nPRINT *, \"Matched\"\nEND IF\nDO I = 1, 3\nPRINT *, I\nEND DO\n",
        );
        assert_eq!(
            program,
            vec![
                Statement::Declaration { variable: "X".into() },
                Statement::Assignment {
                    variable: "X".into(),
                    value: Operand::Number(Number::Int(5)),
                },
                Statement::Print(print_of(vec![
                    PrintItem::StringLiteral("Value:".into()),
                    PrintItem::VariableReference("X".into()),
                ])),
                Statement::Conditional {
                    condition: "X == 5".into(),
                    then_branch: vec![print_of(vec![PrintItem::StringLiteral("Matched".into())])],
                },
                Statement::Loop {
                    variable: "I".into(),
                    start: Operand::Number(Number::Int(1)),
                    end: Operand::Number(Number::Int(3)),
                    body: vec![print_of(vec![PrintItem::VariableReference("I".into())])],
                },
            ]
        );
    }

    #[test]
    fn assignment_keeps_only_the_first_token() {
        let program = statements("X = Y 1\nZ = \"hi\"\nW = (\n");
        assert_eq!(
            program,
            vec![
                Statement::Assignment {
                    variable: "X".into(),
                    value: Operand::Identifier("Y".into()),
                },
                Statement::Assignment {
                    variable: "Z".into(),
                    value: Operand::Str("hi".into()),
                },
                Statement::Assignment {
                    variable: "W".into(),
                    value: Operand::Raw("(".into()),
                },
            ]
        );
    }

    #[test]
    fn print_prefix_is_optional_and_items_are_classified() {
        let program = statements("PRINT \"a\", B, 2.5, ==\n");
        assert_eq!(
            program,
            vec![Statement::Print(print_of(vec![
                PrintItem::StringLiteral("a".into()),
                PrintItem::VariableReference("B".into()),
                PrintItem::RawLiteral("2.5".into()),
                PrintItem::RawLiteral("==".into()),
            ]))]
        );
    }

    #[test]
    fn print_at_end_of_input_without_newline() {
        let program = statements("PRINT *, 7");
        assert_eq!(
            program,
            vec![Statement::Print(print_of(vec![PrintItem::RawLiteral("7".into())]))]
        );
    }

    #[test]
    fn malformed_declarations_produce_nothing() {
        assert!(statements("INTEGER X\n").is_empty());
        assert!(statements("INTEGER :: 5\n").is_empty());
        // the token after a malformed INTEGER is consumed with it
        assert_eq!(
            statements("INTEGER X\nPRINT *, 1\n").len(),
            1
        );
    }

    #[test]
    fn stray_tokens_are_skipped() {
        let program = statements(", ) ( * ::\nINTEGER :: A\n");
        assert_eq!(program, vec![Statement::Declaration { variable: "A".into() }]);
    }

    #[test]
    fn bare_identifier_swallows_the_following_token() {
        let program = statements("X Y = 3\n");
        assert!(program.is_empty());
    }

    #[test]
    fn conditional_body_drops_non_print_statements() {
        let program = statements(
            "IF ( A > 1 ) THEN\nB = 2\nPRINT *, \"big\"\nINTEGER :: C\nEND IF\n",
        );
        assert_eq!(
            program,
            vec![Statement::Conditional {
                condition: "( A > 1 )".into(),
                then_branch: vec![print_of(vec![PrintItem::StringLiteral("big".into())])],
            }]
        );
    }

    #[test]
    fn condition_keeps_string_quotes_and_dotted_operators() {
        let program = statements("IF NAME .EQ. \"BOB\" THEN\nEND IF\n");
        assert_eq!(
            program,
            vec![Statement::Conditional {
                condition: "NAME .EQ. \"BOB\"".into(),
                then_branch: vec![],
            }]
        );
    }

    #[test]
    fn nested_block_is_not_recursed_into() {
        let program = statements(
            "IF A == 1 THEN\nIF B == 2 THEN\nPRINT *, \"inner\"\nEND IF\nPRINT *, \"after\"\nEND IF\n",
        );
        // the inner END IF closes the outer block; the rest is top level
        assert_eq!(program.len(), 2);
        match &program[0] {
            Statement::Conditional { condition, then_branch } => {
                assert_eq!(condition, "A == 1");
                assert_eq!(then_branch.len(), 1);
            }
            other => panic!("expected conditional, got {other:?}"),
        }
        assert!(matches!(program[1], Statement::Print(_)));
    }

    #[test]
    fn loop_bounds_may_be_identifiers() {
        let program = statements("DO K = LO, HI\nX = 1\nPRINT *, K\nEND DO\n");
        assert_eq!(
            program,
            vec![Statement::Loop {
                variable: "K".into(),
                start: Operand::Identifier("LO".into()),
                end: Operand::Identifier("HI".into()),
                body: vec![print_of(vec![PrintItem::VariableReference("K".into())])],
            }]
        );
    }

    fn parse_error(source: &str) -> crate::parser::ParseError {
        let tokens = tokenize(source).unwrap();
        parse(&tokens).unwrap_err()
    }

    #[test]
    fn truncated_forms_raise_parse_errors() {
        assert_eq!(parse_error("INTEGER").code, "ERR-SYN-001");
        assert_eq!(parse_error("INTEGER ::").code, "ERR-SYN-002");
        assert_eq!(parse_error("X =").code, "ERR-SYN-003");
        assert_eq!(parse_error("IF X == 1\n").code, "ERR-SYN-004");
        assert_eq!(parse_error("DO").code, "ERR-SYN-006");
        assert_eq!(parse_error("DO I =").code, "ERR-SYN-007");
        assert_eq!(parse_error("DO I = 1,").code, "ERR-SYN-008");
    }

    #[test]
    fn unterminated_blocks_raise_parse_errors() {
        let err = parse_error("X = 1\nIF X == 1 THEN\nPRINT *, X\n");
        assert_eq!(err.code, "ERR-SYN-005");
        assert!(err.message.contains("line 2"));
        assert_eq!(err.line, Some(3));

        let err = parse_error("DO I = 1, 3\nPRINT *, I\n");
        assert_eq!(err.code, "ERR-SYN-009");
        assert!(err.message.contains("END DO"));
    }

    #[test]
    fn empty_source_is_an_empty_program() {
        assert!(statements("").is_empty());
        assert!(statements("\n\n\n").is_empty());
    }
}
