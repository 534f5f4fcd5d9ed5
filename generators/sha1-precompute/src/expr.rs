//! Expression Tree for Generated Statements
//!
//! Generated code is built as [`Statement`]s over buffer [`Operand`]s and
//! only turned into text at the very end, with the buffer and macro names
//! taken from a [`Naming`] table.

use crate::constants::{
    BLOCK_BUFFER, BROADCAST_MACRO, PRECOMPUTED_BUFFER, ROTATED_W0_BUFFER, ROTATE_MACRO,
    STAGING_BUFFER,
};
use crate::primitives::rotl;
use core::fmt::{self, Write};

// =============================================================================
// NAMING
// =============================================================================

/// Identifiers of the target engine used when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    /// Precomputed schedule buffer.
    pub precomputed: String,
    /// Scalar staging buffer for lane broadcast.
    pub staging: String,
    /// Working schedule buffer.
    pub blocks: String,
    /// Pre-rotated `W[0]` buffer.
    pub rotated_w0: String,
    /// Rotate-left macro, called as `MACRO(word, bits)`.
    pub rotate_macro: String,
    /// Broadcast macro, called as `MACRO(word)`.
    pub broadcast_macro: String,
}

impl Naming {
    /// Identifier of `buffer`.
    pub fn buffer(&self, buffer: Buffer) -> &str {
        match buffer {
            Buffer::Precomputed => &self.precomputed,
            Buffer::Staging => &self.staging,
            Buffer::Blocks => &self.blocks,
            Buffer::RotatedW0 => &self.rotated_w0,
        }
    }
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            precomputed: PRECOMPUTED_BUFFER.to_owned(),
            staging: STAGING_BUFFER.to_owned(),
            blocks: BLOCK_BUFFER.to_owned(),
            rotated_w0: ROTATED_W0_BUFFER.to_owned(),
            rotate_macro: ROTATE_MACRO.to_owned(),
            broadcast_macro: BROADCAST_MACRO.to_owned(),
        }
    }
}

// =============================================================================
// OPERANDS & EXPRESSIONS
// =============================================================================

/// Buffers of the target engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Buffer {
    /// Schedule computed once per outer iteration.
    Precomputed,
    /// Scalar copy of the precomputed schedule before lane broadcast.
    Staging,
    /// Schedule of the current candidate.
    Blocks,
    /// `rotl(W[0], k)` for the inner loop.
    RotatedW0,
}

/// One element of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operand {
    /// Buffer holding the element.
    pub buffer: Buffer,
    /// Element index.
    pub index: usize,
}

impl Operand {
    /// Element `index` of `buffer`.
    pub const fn new(buffer: Buffer, index: usize) -> Self {
        Self { buffer, index }
    }

    fn write(self, naming: &Naming, out: &mut impl Write) -> fmt::Result {
        write!(out, "{}[{}]", naming.buffer(self.buffer), self.index)
    }
}

/// Right-hand side of a generated assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Literal zero.
    Zero,
    /// Plain copy of an operand.
    Load(Operand),
    /// XOR of one or more operands, in order.
    Xor(Vec<Operand>),
    /// Rotate-left of an operand by a fixed amount.
    Rotate {
        /// Rotated word.
        operand: Operand,
        /// Rotation in bits.
        bits: u32,
    },
    /// Replicate a scalar into every SIMD lane.
    Broadcast(Operand),
}

impl Expr {
    /// XOR of `operands`, or [`Expr::Zero`] when there are none.
    pub fn xor(operands: Vec<Operand>) -> Self {
        if operands.is_empty() {
            Self::Zero
        } else {
            Self::Xor(operands)
        }
    }

    /// Operands read by the expression, in order.
    pub fn operands(&self) -> &[Operand] {
        match self {
            Self::Zero => &[],
            Self::Xor(operands) => operands,
            Self::Load(operand) | Self::Rotate { operand, .. } | Self::Broadcast(operand) => {
                core::slice::from_ref(operand)
            }
        }
    }

    /// Scalar value of the expression given a value for every operand.
    ///
    /// A broadcast evaluates to the value of a single lane.
    pub fn evaluate(&self, mut load: impl FnMut(Operand) -> u32) -> u32 {
        match self {
            Self::Zero => 0,
            Self::Load(operand) | Self::Broadcast(operand) => load(*operand),
            Self::Xor(operands) => operands.iter().fold(0, |acc, &op| acc ^ load(op)),
            Self::Rotate { operand, bits } => rotl(load(*operand), *bits),
        }
    }

    fn write(&self, naming: &Naming, out: &mut impl Write) -> fmt::Result {
        match self {
            Self::Zero => out.write_char('0'),
            Self::Load(operand) => operand.write(naming, out),
            Self::Xor(operands) => {
                for (position, operand) in operands.iter().enumerate() {
                    if position > 0 {
                        out.write_str(" ^ ")?;
                    }
                    operand.write(naming, out)?;
                }
                Ok(())
            }
            Self::Rotate { operand, bits } => {
                write!(out, "{}(", naming.rotate_macro)?;
                operand.write(naming, out)?;
                write!(out, ", {bits})")
            }
            Self::Broadcast(operand) => {
                write!(out, "{}(", naming.broadcast_macro)?;
                operand.write(naming, out)?;
                out.write_char(')')
            }
        }
    }
}

// =============================================================================
// STATEMENTS & FRAGMENTS
// =============================================================================

/// `target = value;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Assigned element.
    pub target: Operand,
    /// Assigned value.
    pub value: Expr,
}

impl Statement {
    /// Assignment of `value` to `target`.
    pub const fn new(target: Operand, value: Expr) -> Self {
        Self { target, value }
    }

    /// Render as a single line without the trailing newline.
    pub fn render(&self, naming: &Naming) -> String {
        self.display(naming).to_string()
    }

    /// [`fmt::Display`] view of the statement under `naming`.
    pub const fn display<'a>(&'a self, naming: &'a Naming) -> StatementDisplay<'a> {
        StatementDisplay {
            statement: self,
            naming,
        }
    }

    fn write(&self, naming: &Naming, out: &mut impl Write) -> fmt::Result {
        self.target.write(naming, out)?;
        out.write_str(" = ")?;
        self.value.write(naming, out)?;
        out.write_char(';')
    }
}

/// A [`Statement`] paired with the names it is rendered with.
#[derive(Debug, Clone, Copy)]
pub struct StatementDisplay<'a> {
    statement: &'a Statement,
    naming: &'a Naming,
}

impl fmt::Display for StatementDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statement.write(self.naming, f)
    }
}

/// A named, ordered block of statements pasted as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Short identifier of the block.
    pub name: &'static str,
    /// Statements in emission order.
    pub statements: Vec<Statement>,
}

impl Fragment {
    /// Render every statement on its own newline-terminated line.
    pub fn render(&self, naming: &Naming) -> String {
        let mut text = String::new();
        for statement in &self.statements {
            text.push_str(&statement.render(naming));
            text.push('\n');
        }
        text
    }
}
