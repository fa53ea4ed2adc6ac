//! Opcode classification predicates.
//!
//! Each predicate is a total function over [`Opcode`]: it lists the members of one
//! semantic category and answers `false` for everything else. Categories are
//! independent and may overlap. The derived predicates (`is_constant_or_undef`,
//! `is_atomic_op`, `is_return_or_abort`, `is_block_terminator`) are defined in terms
//! of the base lists so they cannot disagree with them.
//!
//! A new opcode that is not added here silently classifies as a member of nothing.
//! `tests/unit/isa/membership.rs` pins the exact member list of every category, so any
//! change to these lists has to be made there as well.

use crate::isa::opcode::Opcode;
use crate::isa::opcode::Opcode as Op;

/// Declares a scalar numeric or boolean type.
pub const fn is_scalar_type(op: Opcode) -> bool {
    matches!(op, Op::TypeInt | Op::TypeFloat | Op::TypeBool)
}

/// Declares a specialization constant.
pub const fn is_spec_constant(op: Opcode) -> bool {
    matches!(
        op,
        Op::SpecConstantTrue
            | Op::SpecConstantFalse
            | Op::SpecConstant
            | Op::SpecConstantComposite
            | Op::SpecConstantCompositeReplicateEXT
            | Op::SpecConstantOp
    )
}

/// Declares a constant of any kind, specialization constants included.
pub const fn is_constant(op: Opcode) -> bool {
    matches!(
        op,
        Op::ConstantTrue
            | Op::ConstantFalse
            | Op::Constant
            | Op::ConstantComposite
            | Op::ConstantCompositeReplicateEXT
            | Op::ConstantSampler
            | Op::ConstantNull
            | Op::ConstantFunctionPointerINTEL
            | Op::ConstantStringAMDX
            | Op::SpecConstantTrue
            | Op::SpecConstantFalse
            | Op::SpecConstant
            | Op::SpecConstantComposite
            | Op::SpecConstantCompositeReplicateEXT
            | Op::SpecConstantOp
            | Op::SpecConstantStringAMDX
            | Op::AsmTargetINTEL
            | Op::AsmINTEL
    )
}

/// A constant, or the undefined-value sentinel `OpUndef`.
pub const fn is_constant_or_undef(op: Opcode) -> bool {
    matches!(op, Op::Undef) || is_constant(op)
}

/// A specialization constant of scalar kind.
pub const fn is_scalar_spec_constant(op: Opcode) -> bool {
    matches!(
        op,
        Op::SpecConstantTrue | Op::SpecConstantFalse | Op::SpecConstant
    )
}

/// Declares a composite type: vector, matrix, array, struct or cooperative type.
pub const fn is_composite_type(op: Opcode) -> bool {
    matches!(
        op,
        Op::TypeVector
            | Op::TypeMatrix
            | Op::TypeArray
            | Op::TypeStruct
            | Op::TypeRuntimeArray
            | Op::TypeCooperativeMatrixNV
            | Op::TypeCooperativeMatrixKHR
            | Op::TypeCooperativeVectorNV
    )
}

/// The result may be used as a logical pointer under the `VariablePointers` rules.
pub const fn returns_logical_variable_pointer(op: Opcode) -> bool {
    matches!(
        op,
        Op::Variable
            | Op::UntypedVariableKHR
            | Op::AccessChain
            | Op::InBoundsAccessChain
            | Op::UntypedAccessChainKHR
            | Op::UntypedInBoundsAccessChainKHR
            | Op::FunctionParameter
            | Op::ImageTexelPointer
            | Op::CopyObject
            | Op::AllocateNodePayloadsAMDX
            | Op::Select
            | Op::Phi
            | Op::FunctionCall
            | Op::PtrAccessChain
            | Op::UntypedPtrAccessChainKHR
            | Op::Load
            | Op::ConstantNull
            | Op::RawAccessChainNV
    )
}

/// The result may be used as a logical pointer.
pub const fn returns_logical_pointer(op: Opcode) -> bool {
    matches!(
        op,
        Op::Variable
            | Op::UntypedVariableKHR
            | Op::AccessChain
            | Op::InBoundsAccessChain
            | Op::UntypedAccessChainKHR
            | Op::UntypedInBoundsAccessChainKHR
            | Op::FunctionParameter
            | Op::ImageTexelPointer
            | Op::CopyObject
            | Op::RawAccessChainNV
            | Op::AllocateNodePayloadsAMDX
    )
}

/// Declares a new type.
///
/// `OpTypeForwardPointer` is deliberately absent: it declares the storage class of a
/// pointer type generated by another instruction.
pub const fn generates_type(op: Opcode) -> bool {
    matches!(
        op,
        Op::TypeVoid
            | Op::TypeBool
            | Op::TypeInt
            | Op::TypeFloat
            | Op::TypeVector
            | Op::TypeMatrix
            | Op::TypeImage
            | Op::TypeSampler
            | Op::TypeSampledImage
            | Op::TypeArray
            | Op::TypeRuntimeArray
            | Op::TypeStruct
            | Op::TypeOpaque
            | Op::TypePointer
            | Op::TypeFunction
            | Op::TypeEvent
            | Op::TypeDeviceEvent
            | Op::TypeReserveId
            | Op::TypeQueue
            | Op::TypePipe
            | Op::TypePipeStorage
            | Op::TypeNamedBarrier
            | Op::TypeAccelerationStructureKHR
            | Op::TypeCooperativeMatrixNV
            | Op::TypeCooperativeMatrixKHR
            | Op::TypeCooperativeVectorNV
            | Op::TypeRayQueryKHR
            | Op::TypeHitObjectNV
            | Op::TypeUntypedPointerKHR
            | Op::TypeNodePayloadArrayAMDX
            | Op::TypeTensorLayoutNV
            | Op::TypeTensorViewNV
            | Op::TypeTensorARM
            | Op::TypeTaskSequenceINTEL
    )
}

/// Attaches a decoration to a target id.
pub const fn is_decoration(op: Opcode) -> bool {
    matches!(
        op,
        Op::Decorate
            | Op::DecorateId
            | Op::MemberDecorate
            | Op::GroupDecorate
            | Op::GroupMemberDecorate
            | Op::DecorateString
            | Op::MemberDecorateString
    )
}

/// Reads memory, or samples/fetches/reads image data.
pub const fn is_load(op: Opcode) -> bool {
    matches!(
        op,
        Op::Load
            | Op::ImageSampleExplicitLod
            | Op::ImageSampleImplicitLod
            | Op::ImageSampleDrefImplicitLod
            | Op::ImageSampleDrefExplicitLod
            | Op::ImageSampleProjImplicitLod
            | Op::ImageSampleProjExplicitLod
            | Op::ImageSampleProjDrefImplicitLod
            | Op::ImageSampleProjDrefExplicitLod
            | Op::ImageSampleFootprintNV
            | Op::ImageFetch
            | Op::ImageGather
            | Op::ImageDrefGather
            | Op::ImageRead
            | Op::ImageSparseSampleImplicitLod
            | Op::ImageSparseSampleExplicitLod
            | Op::ImageSparseSampleDrefExplicitLod
            | Op::ImageSparseSampleDrefImplicitLod
            | Op::ImageSparseFetch
            | Op::ImageSparseGather
            | Op::ImageSparseDrefGather
            | Op::ImageSparseRead
    )
}

/// Transfers control to another block.
pub const fn is_branch(op: Opcode) -> bool {
    matches!(op, Op::Branch | Op::BranchConditional | Op::Switch)
}

/// Returns from the current function.
pub const fn is_return(op: Opcode) -> bool {
    matches!(op, Op::Return | Op::ReturnValue)
}

/// Ends the invocation (or the current shader stage) without returning.
pub const fn is_abort(op: Opcode) -> bool {
    matches!(
        op,
        Op::Kill
            | Op::Unreachable
            | Op::TerminateInvocation
            | Op::TerminateRayKHR
            | Op::IgnoreIntersectionKHR
            | Op::EmitMeshTasksEXT
    )
}

/// A return or an abort.
pub const fn is_return_or_abort(op: Opcode) -> bool {
    is_return(op) || is_abort(op)
}

/// Ends a basic block: a branch, a return or an abort.
pub const fn is_block_terminator(op: Opcode) -> bool {
    is_branch(op) || is_return_or_abort(op)
}

/// An atomic that reads the prior value of its pointer.
pub const fn is_atomic_with_load(op: Opcode) -> bool {
    matches!(
        op,
        Op::AtomicLoad
            | Op::AtomicExchange
            | Op::AtomicCompareExchange
            | Op::AtomicCompareExchangeWeak
            | Op::AtomicIIncrement
            | Op::AtomicIDecrement
            | Op::AtomicIAdd
            | Op::AtomicFAddEXT
            | Op::AtomicISub
            | Op::AtomicSMin
            | Op::AtomicUMin
            | Op::AtomicFMinEXT
            | Op::AtomicSMax
            | Op::AtomicUMax
            | Op::AtomicFMaxEXT
            | Op::AtomicAnd
            | Op::AtomicOr
            | Op::AtomicXor
            | Op::AtomicFlagTestAndSet
    )
}

/// Any atomic operation, including the load-less store and flag-clear forms.
pub const fn is_atomic_op(op: Opcode) -> bool {
    is_atomic_with_load(op) || matches!(op, Op::AtomicStore | Op::AtomicFlagClear)
}

/// Declares an opaque type with no accessible layout.
pub const fn is_base_opaque_type(op: Opcode) -> bool {
    matches!(
        op,
        Op::TypeImage
            | Op::TypeSampler
            | Op::TypeSampledImage
            | Op::TypeOpaque
            | Op::TypeEvent
            | Op::TypeDeviceEvent
            | Op::TypeReserveId
            | Op::TypeQueue
            | Op::TypePipe
            | Op::TypeForwardPointer
            | Op::TypePipeStorage
            | Op::TypeNamedBarrier
    )
}

/// A subgroup `OpGroupNonUniform*` collective.
pub const fn is_non_uniform_group_op(op: Opcode) -> bool {
    matches!(
        op,
        Op::GroupNonUniformElect
            | Op::GroupNonUniformAll
            | Op::GroupNonUniformAny
            | Op::GroupNonUniformAllEqual
            | Op::GroupNonUniformBroadcast
            | Op::GroupNonUniformBroadcastFirst
            | Op::GroupNonUniformBallot
            | Op::GroupNonUniformInverseBallot
            | Op::GroupNonUniformBallotBitExtract
            | Op::GroupNonUniformBallotBitCount
            | Op::GroupNonUniformBallotFindLSB
            | Op::GroupNonUniformBallotFindMSB
            | Op::GroupNonUniformShuffle
            | Op::GroupNonUniformShuffleXor
            | Op::GroupNonUniformShuffleUp
            | Op::GroupNonUniformShuffleDown
            | Op::GroupNonUniformIAdd
            | Op::GroupNonUniformFAdd
            | Op::GroupNonUniformIMul
            | Op::GroupNonUniformFMul
            | Op::GroupNonUniformSMin
            | Op::GroupNonUniformUMin
            | Op::GroupNonUniformFMin
            | Op::GroupNonUniformSMax
            | Op::GroupNonUniformUMax
            | Op::GroupNonUniformFMax
            | Op::GroupNonUniformBitwiseAnd
            | Op::GroupNonUniformBitwiseOr
            | Op::GroupNonUniformBitwiseXor
            | Op::GroupNonUniformLogicalAnd
            | Op::GroupNonUniformLogicalOr
            | Op::GroupNonUniformLogicalXor
            | Op::GroupNonUniformQuadBroadcast
            | Op::GroupNonUniformQuadSwap
            | Op::GroupNonUniformRotateKHR
            | Op::GroupNonUniformQuadAllKHR
            | Op::GroupNonUniformQuadAnyKHR
    )
}

/// Can be split into one operation per vector component without changing its result.
pub const fn is_scalarizable(op: Opcode) -> bool {
    matches!(
        op,
        Op::Phi
            | Op::CopyObject
            | Op::ConvertFToU
            | Op::ConvertFToS
            | Op::ConvertSToF
            | Op::ConvertUToF
            | Op::UConvert
            | Op::SConvert
            | Op::FConvert
            | Op::QuantizeToF16
            | Op::VectorInsertDynamic
            | Op::SNegate
            | Op::FNegate
            | Op::IAdd
            | Op::FAdd
            | Op::ISub
            | Op::FSub
            | Op::IMul
            | Op::FMul
            | Op::UDiv
            | Op::SDiv
            | Op::FDiv
            | Op::UMod
            | Op::SRem
            | Op::SMod
            | Op::FRem
            | Op::FMod
            | Op::VectorTimesScalar
            | Op::IAddCarry
            | Op::ISubBorrow
            | Op::UMulExtended
            | Op::SMulExtended
            | Op::ShiftRightLogical
            | Op::ShiftRightArithmetic
            | Op::ShiftLeftLogical
            | Op::BitwiseOr
            | Op::BitwiseAnd
            | Op::Not
            | Op::BitFieldInsert
            | Op::BitFieldSExtract
            | Op::BitFieldUExtract
            | Op::BitReverse
            | Op::BitCount
            | Op::IsNan
            | Op::IsInf
            | Op::IsFinite
            | Op::IsNormal
            | Op::SignBitSet
            | Op::LessOrGreater
            | Op::Ordered
            | Op::Unordered
            | Op::LogicalEqual
            | Op::LogicalNotEqual
            | Op::LogicalOr
            | Op::LogicalAnd
            | Op::LogicalNot
            | Op::Select
            | Op::IEqual
            | Op::INotEqual
            | Op::UGreaterThan
            | Op::SGreaterThan
            | Op::UGreaterThanEqual
            | Op::SGreaterThanEqual
            | Op::ULessThan
            | Op::SLessThan
            | Op::ULessThanEqual
            | Op::SLessThanEqual
            | Op::FOrdEqual
            | Op::FUnordEqual
            | Op::FOrdNotEqual
            | Op::FUnordNotEqual
            | Op::FOrdLessThan
            | Op::FUnordLessThan
            | Op::FOrdGreaterThan
            | Op::FUnordGreaterThan
            | Op::FOrdLessThanEqual
            | Op::FUnordLessThanEqual
            | Op::FOrdGreaterThanEqual
            | Op::FUnordGreaterThanEqual
    )
}

/// A debug or source-mapping instruction with no effect on execution.
pub const fn is_debug(op: Opcode) -> bool {
    matches!(
        op,
        Op::Name
            | Op::MemberName
            | Op::Source
            | Op::SourceContinued
            | Op::SourceExtension
            | Op::String
            | Op::Line
            | Op::NoLine
            | Op::ModuleProcessed
    )
}

/// A binary operator whose result does not depend on operand order.
pub const fn is_commutative_binary_op(op: Opcode) -> bool {
    matches!(
        op,
        Op::PtrEqual
            | Op::PtrNotEqual
            | Op::IAdd
            | Op::FAdd
            | Op::IMul
            | Op::FMul
            | Op::Dot
            | Op::IAddCarry
            | Op::UMulExtended
            | Op::SMulExtended
            | Op::BitwiseOr
            | Op::BitwiseXor
            | Op::BitwiseAnd
            | Op::Ordered
            | Op::Unordered
            | Op::LogicalEqual
            | Op::LogicalNotEqual
            | Op::LogicalOr
            | Op::LogicalAnd
            | Op::IEqual
            | Op::INotEqual
            | Op::FOrdEqual
            | Op::FUnordEqual
            | Op::FOrdNotEqual
            | Op::FUnordNotEqual
    )
}

/// Vector/matrix arithmetic.
pub const fn is_linear_algebra(op: Opcode) -> bool {
    matches!(
        op,
        Op::Transpose
            | Op::VectorTimesScalar
            | Op::MatrixTimesScalar
            | Op::VectorTimesMatrix
            | Op::MatrixTimesVector
            | Op::MatrixTimesMatrix
            | Op::OuterProduct
            | Op::Dot
    )
}

/// Any image-sampling form (implicit/explicit LOD, depth-reference, projective, sparse, footprint).
pub const fn is_image_sample(op: Opcode) -> bool {
    matches!(
        op,
        Op::ImageSampleImplicitLod
            | Op::ImageSampleExplicitLod
            | Op::ImageSampleDrefImplicitLod
            | Op::ImageSampleDrefExplicitLod
            | Op::ImageSampleProjImplicitLod
            | Op::ImageSampleProjExplicitLod
            | Op::ImageSampleProjDrefImplicitLod
            | Op::ImageSampleProjDrefExplicitLod
            | Op::ImageSparseSampleImplicitLod
            | Op::ImageSparseSampleExplicitLod
            | Op::ImageSparseSampleDrefImplicitLod
            | Op::ImageSparseSampleDrefExplicitLod
            | Op::ImageSampleFootprintNV
    )
}

/// Dispatches into an extended instruction set.
pub const fn is_extended_instruction(op: Opcode) -> bool {
    matches!(op, Op::ExtInst | Op::ExtInstWithForwardRefsKHR)
}

/// An access chain, typed or untyped.
pub const fn is_access_chain(op: Opcode) -> bool {
    matches!(
        op,
        Op::AccessChain
            | Op::InBoundsAccessChain
            | Op::PtrAccessChain
            | Op::InBoundsPtrAccessChain
            | Op::UntypedAccessChainKHR
            | Op::UntypedInBoundsAccessChainKHR
            | Op::UntypedPtrAccessChainKHR
            | Op::UntypedInBoundsPtrAccessChainKHR
            | Op::RawAccessChainNV
    )
}

/// A bitwise, shift or bit-counting operation.
pub const fn is_bit_op(op: Opcode) -> bool {
    matches!(
        op,
        Op::ShiftRightLogical
            | Op::ShiftRightArithmetic
            | Op::ShiftLeftLogical
            | Op::BitwiseOr
            | Op::BitwiseXor
            | Op::BitwiseAnd
            | Op::Not
            | Op::BitReverse
            | Op::BitCount
    )
}

/// Produces a pointer with no static pointee type.
pub const fn generates_untyped_pointer(op: Opcode) -> bool {
    matches!(
        op,
        Op::UntypedVariableKHR
            | Op::UntypedAccessChainKHR
            | Op::UntypedInBoundsAccessChainKHR
            | Op::UntypedPtrAccessChainKHR
            | Op::UntypedInBoundsPtrAccessChainKHR
    )
}

macro_rules! opcode_methods {
    ($($name:ident),* $(,)?) => {
        impl Opcode {
            $(
                #[doc = concat!("Method form of [`", stringify!($name), "`].")]
                #[inline]
                pub const fn $name(self) -> bool {
                    $name(self)
                }
            )*
        }
    };
}

opcode_methods!(
    is_scalar_type,
    is_spec_constant,
    is_constant,
    is_constant_or_undef,
    is_scalar_spec_constant,
    is_composite_type,
    returns_logical_pointer,
    returns_logical_variable_pointer,
    generates_type,
    is_decoration,
    is_load,
    is_branch,
    is_return,
    is_abort,
    is_return_or_abort,
    is_block_terminator,
    is_atomic_with_load,
    is_atomic_op,
    is_base_opaque_type,
    is_non_uniform_group_op,
    is_scalarizable,
    is_debug,
    is_commutative_binary_op,
    is_linear_algebra,
    is_image_sample,
    is_extended_instruction,
    is_access_chain,
    is_bit_op,
    generates_untyped_pointer,
);
