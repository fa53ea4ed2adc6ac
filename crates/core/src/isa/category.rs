//! Per-opcode category sets.
//!
//! The predicates in [`crate::isa::classify`] answer one question at a time. This
//! module folds all of them into a [`Categories`] bitset per opcode, built once from
//! [`Opcode::ALL`] on first use, for bulk reporting and for auditing coverage of the
//! enumeration.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer};

use crate::isa::classify;
use crate::isa::opcode::Opcode;

macro_rules! categories {
    ($($variant:ident => $name:literal, $predicate:path;)*) => {
        /// A semantic category an opcode may belong to.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Category {
            $(
                #[doc = concat!("Members satisfy [`", stringify!($predicate), "`].")]
                $variant,
            )*
        }

        impl Category {
            /// Every category, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Kebab-case name used in reports.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Evaluates this category's predicate.
            pub const fn contains(self, op: Opcode) -> bool {
                match self {
                    $(Self::$variant => $predicate(op),)*
                }
            }
        }
    };
}

categories! {
    ScalarType => "scalar-type", classify::is_scalar_type;
    SpecConstant => "spec-constant", classify::is_spec_constant;
    Constant => "constant", classify::is_constant;
    ConstantOrUndef => "constant-or-undef", classify::is_constant_or_undef;
    ScalarSpecConstant => "scalar-spec-constant", classify::is_scalar_spec_constant;
    CompositeType => "composite-type", classify::is_composite_type;
    ReturnsLogicalPointer => "returns-logical-pointer", classify::returns_logical_pointer;
    ReturnsLogicalVariablePointer => "returns-logical-variable-pointer", classify::returns_logical_variable_pointer;
    GeneratesType => "generates-type", classify::generates_type;
    Decoration => "decoration", classify::is_decoration;
    Load => "load", classify::is_load;
    Branch => "branch", classify::is_branch;
    Return => "return", classify::is_return;
    Abort => "abort", classify::is_abort;
    ReturnOrAbort => "return-or-abort", classify::is_return_or_abort;
    BlockTerminator => "block-terminator", classify::is_block_terminator;
    AtomicWithLoad => "atomic-with-load", classify::is_atomic_with_load;
    AtomicOp => "atomic-op", classify::is_atomic_op;
    BaseOpaqueType => "base-opaque-type", classify::is_base_opaque_type;
    NonUniformGroupOp => "non-uniform-group-op", classify::is_non_uniform_group_op;
    Scalarizable => "scalarizable", classify::is_scalarizable;
    Debug => "debug", classify::is_debug;
    CommutativeBinaryOp => "commutative-binary-op", classify::is_commutative_binary_op;
    LinearAlgebra => "linear-algebra", classify::is_linear_algebra;
    ImageSample => "image-sample", classify::is_image_sample;
    ExtendedInstruction => "extended-instruction", classify::is_extended_instruction;
    AccessChain => "access-chain", classify::is_access_chain;
    BitOp => "bit-op", classify::is_bit_op;
    GeneratesUntypedPointer => "generates-untyped-pointer", classify::generates_untyped_pointer;
}

impl Category {
    /// Resolves a kebab-case category name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    #[inline]
    const fn bit(self) -> u32 {
        1 << (self as u8)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`Category`] values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Categories(u32);

impl Categories {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Evaluates every predicate for `op`.
    pub fn of(op: Opcode) -> Self {
        Category::ALL
            .iter()
            .filter(|category| category.contains(op))
            .fold(Self::EMPTY, |set, &category| set.with(category))
    }

    /// Returns the set with `category` added.
    #[inline]
    #[must_use]
    pub const fn with(self, category: Category) -> Self {
        Self(self.0 | category.bit())
    }

    /// Returns `true` if `category` is a member.
    #[inline]
    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of members.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the members in [`Category::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(move |&category| self.contains(category))
    }
}

impl FromIterator<Category> for Categories {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for category in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(category.name())?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for Categories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for category in self.iter() {
            seq.serialize_element(category.name())?;
        }
        seq.end()
    }
}

/// `(opcode, categories)` for every opcode, sorted by opcode value.
static CATEGORY_TABLE: LazyLock<Vec<(Opcode, Categories)>> = LazyLock::new(|| {
    Opcode::ALL
        .iter()
        .map(|&op| (op, Categories::of(op)))
        .collect()
});

/// Returns the category table, building it on first use.
pub fn category_table() -> &'static [(Opcode, Categories)] {
    &CATEGORY_TABLE
}

/// Returns the categories `op` belongs to.
pub fn categories(op: Opcode) -> Categories {
    CATEGORY_TABLE
        .binary_search_by_key(&op, |&(entry, _)| entry)
        .map_or_else(|_| Categories::of(op), |index| CATEGORY_TABLE[index].1)
}

impl Opcode {
    /// Returns the categories this opcode belongs to.
    #[inline]
    pub fn categories(self) -> Categories {
        categories(self)
    }
}
