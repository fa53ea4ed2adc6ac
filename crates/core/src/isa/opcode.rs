//! SPIR-V opcode enumeration.
//!
//! The enumeration, its ascending `ALL` list and the instruction descriptor table are
//! generated from a single `(Variant = value)` list, so the three can never drift apart.
//! Registry aliases that share a value with a canonical opcode (the `GOOGLE`/`NV`
//! spellings) are associated constants rather than extra variants.

use std::fmt;

use crate::common::error::{Error, Result};
use crate::isa::grammar::{self, InstructionDesc};

macro_rules! opcodes {
    ($($variant:ident = $value:literal,)*) => {
        /// Operation code of a SPIR-V instruction (bits 0-15 of the header word).
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Opcode {
            $(
                #[doc = concat!("`Op", stringify!($variant), "` (", stringify!($value), ").")]
                $variant = $value,
            )*
        }

        impl Opcode {
            /// Every opcode, in ascending numeric order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Maps a raw 16-bit value onto its variant, if one exists.
            pub const fn from_u16(value: u16) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        /// Instruction descriptors, one per opcode, sorted by opcode value.
        pub(crate) static INSTRUCTION_TABLE: &[InstructionDesc] = &[
            $(InstructionDesc::new(Opcode::$variant, concat!("Op", stringify!($variant))),)*
        ];
    };
}

opcodes! {
    Nop = 0,
    Undef = 1,
    SourceContinued = 2,
    Source = 3,
    SourceExtension = 4,
    Name = 5,
    MemberName = 6,
    String = 7,
    Line = 8,
    Extension = 10,
    ExtInstImport = 11,
    ExtInst = 12,
    MemoryModel = 14,
    EntryPoint = 15,
    ExecutionMode = 16,
    Capability = 17,
    TypeVoid = 19,
    TypeBool = 20,
    TypeInt = 21,
    TypeFloat = 22,
    TypeVector = 23,
    TypeMatrix = 24,
    TypeImage = 25,
    TypeSampler = 26,
    TypeSampledImage = 27,
    TypeArray = 28,
    TypeRuntimeArray = 29,
    TypeStruct = 30,
    TypeOpaque = 31,
    TypePointer = 32,
    TypeFunction = 33,
    TypeEvent = 34,
    TypeDeviceEvent = 35,
    TypeReserveId = 36,
    TypeQueue = 37,
    TypePipe = 38,
    TypeForwardPointer = 39,
    ConstantTrue = 41,
    ConstantFalse = 42,
    Constant = 43,
    ConstantComposite = 44,
    ConstantSampler = 45,
    ConstantNull = 46,
    SpecConstantTrue = 48,
    SpecConstantFalse = 49,
    SpecConstant = 50,
    SpecConstantComposite = 51,
    SpecConstantOp = 52,
    Function = 54,
    FunctionParameter = 55,
    FunctionEnd = 56,
    FunctionCall = 57,
    Variable = 59,
    ImageTexelPointer = 60,
    Load = 61,
    Store = 62,
    CopyMemory = 63,
    CopyMemorySized = 64,
    AccessChain = 65,
    InBoundsAccessChain = 66,
    PtrAccessChain = 67,
    ArrayLength = 68,
    GenericPtrMemSemantics = 69,
    InBoundsPtrAccessChain = 70,
    Decorate = 71,
    MemberDecorate = 72,
    DecorationGroup = 73,
    GroupDecorate = 74,
    GroupMemberDecorate = 75,
    VectorExtractDynamic = 77,
    VectorInsertDynamic = 78,
    VectorShuffle = 79,
    CompositeConstruct = 80,
    CompositeExtract = 81,
    CompositeInsert = 82,
    CopyObject = 83,
    Transpose = 84,
    SampledImage = 86,
    ImageSampleImplicitLod = 87,
    ImageSampleExplicitLod = 88,
    ImageSampleDrefImplicitLod = 89,
    ImageSampleDrefExplicitLod = 90,
    ImageSampleProjImplicitLod = 91,
    ImageSampleProjExplicitLod = 92,
    ImageSampleProjDrefImplicitLod = 93,
    ImageSampleProjDrefExplicitLod = 94,
    ImageFetch = 95,
    ImageGather = 96,
    ImageDrefGather = 97,
    ImageRead = 98,
    ImageWrite = 99,
    Image = 100,
    ImageQueryFormat = 101,
    ImageQueryOrder = 102,
    ImageQuerySizeLod = 103,
    ImageQuerySize = 104,
    ImageQueryLod = 105,
    ImageQueryLevels = 106,
    ImageQuerySamples = 107,
    ConvertFToU = 109,
    ConvertFToS = 110,
    ConvertSToF = 111,
    ConvertUToF = 112,
    UConvert = 113,
    SConvert = 114,
    FConvert = 115,
    QuantizeToF16 = 116,
    ConvertPtrToU = 117,
    SatConvertSToU = 118,
    SatConvertUToS = 119,
    ConvertUToPtr = 120,
    PtrCastToGeneric = 121,
    GenericCastToPtr = 122,
    GenericCastToPtrExplicit = 123,
    Bitcast = 124,
    SNegate = 126,
    FNegate = 127,
    IAdd = 128,
    FAdd = 129,
    ISub = 130,
    FSub = 131,
    IMul = 132,
    FMul = 133,
    UDiv = 134,
    SDiv = 135,
    FDiv = 136,
    UMod = 137,
    SRem = 138,
    SMod = 139,
    FRem = 140,
    FMod = 141,
    VectorTimesScalar = 142,
    MatrixTimesScalar = 143,
    VectorTimesMatrix = 144,
    MatrixTimesVector = 145,
    MatrixTimesMatrix = 146,
    OuterProduct = 147,
    Dot = 148,
    IAddCarry = 149,
    ISubBorrow = 150,
    UMulExtended = 151,
    SMulExtended = 152,
    Any = 154,
    All = 155,
    IsNan = 156,
    IsInf = 157,
    IsFinite = 158,
    IsNormal = 159,
    SignBitSet = 160,
    LessOrGreater = 161,
    Ordered = 162,
    Unordered = 163,
    LogicalEqual = 164,
    LogicalNotEqual = 165,
    LogicalOr = 166,
    LogicalAnd = 167,
    LogicalNot = 168,
    Select = 169,
    IEqual = 170,
    INotEqual = 171,
    UGreaterThan = 172,
    SGreaterThan = 173,
    UGreaterThanEqual = 174,
    SGreaterThanEqual = 175,
    ULessThan = 176,
    SLessThan = 177,
    ULessThanEqual = 178,
    SLessThanEqual = 179,
    FOrdEqual = 180,
    FUnordEqual = 181,
    FOrdNotEqual = 182,
    FUnordNotEqual = 183,
    FOrdLessThan = 184,
    FUnordLessThan = 185,
    FOrdGreaterThan = 186,
    FUnordGreaterThan = 187,
    FOrdLessThanEqual = 188,
    FUnordLessThanEqual = 189,
    FOrdGreaterThanEqual = 190,
    FUnordGreaterThanEqual = 191,
    ShiftRightLogical = 194,
    ShiftRightArithmetic = 195,
    ShiftLeftLogical = 196,
    BitwiseOr = 197,
    BitwiseXor = 198,
    BitwiseAnd = 199,
    Not = 200,
    BitFieldInsert = 201,
    BitFieldSExtract = 202,
    BitFieldUExtract = 203,
    BitReverse = 204,
    BitCount = 205,
    DPdx = 207,
    DPdy = 208,
    Fwidth = 209,
    DPdxFine = 210,
    DPdyFine = 211,
    FwidthFine = 212,
    DPdxCoarse = 213,
    DPdyCoarse = 214,
    FwidthCoarse = 215,
    EmitVertex = 218,
    EndPrimitive = 219,
    EmitStreamVertex = 220,
    EndStreamPrimitive = 221,
    ControlBarrier = 224,
    MemoryBarrier = 225,
    AtomicLoad = 227,
    AtomicStore = 228,
    AtomicExchange = 229,
    AtomicCompareExchange = 230,
    AtomicCompareExchangeWeak = 231,
    AtomicIIncrement = 232,
    AtomicIDecrement = 233,
    AtomicIAdd = 234,
    AtomicISub = 235,
    AtomicSMin = 236,
    AtomicUMin = 237,
    AtomicSMax = 238,
    AtomicUMax = 239,
    AtomicAnd = 240,
    AtomicOr = 241,
    AtomicXor = 242,
    Phi = 245,
    LoopMerge = 246,
    SelectionMerge = 247,
    Label = 248,
    Branch = 249,
    BranchConditional = 250,
    Switch = 251,
    Kill = 252,
    Return = 253,
    ReturnValue = 254,
    Unreachable = 255,
    LifetimeStart = 256,
    LifetimeStop = 257,
    GroupAsyncCopy = 259,
    GroupWaitEvents = 260,
    GroupAll = 261,
    GroupAny = 262,
    GroupBroadcast = 263,
    GroupIAdd = 264,
    GroupFAdd = 265,
    GroupFMin = 266,
    GroupUMin = 267,
    GroupSMin = 268,
    GroupFMax = 269,
    GroupUMax = 270,
    GroupSMax = 271,
    ReadPipe = 274,
    WritePipe = 275,
    ReservedReadPipe = 276,
    ReservedWritePipe = 277,
    ReserveReadPipePackets = 278,
    ReserveWritePipePackets = 279,
    CommitReadPipe = 280,
    CommitWritePipe = 281,
    IsValidReserveId = 282,
    GetNumPipePackets = 283,
    GetMaxPipePackets = 284,
    GroupReserveReadPipePackets = 285,
    GroupReserveWritePipePackets = 286,
    GroupCommitReadPipe = 287,
    GroupCommitWritePipe = 288,
    EnqueueMarker = 291,
    EnqueueKernel = 292,
    GetKernelNDrangeSubGroupCount = 293,
    GetKernelNDrangeMaxSubGroupSize = 294,
    GetKernelWorkGroupSize = 295,
    GetKernelPreferredWorkGroupSizeMultiple = 296,
    RetainEvent = 297,
    ReleaseEvent = 298,
    CreateUserEvent = 299,
    IsValidEvent = 300,
    SetUserEventStatus = 301,
    CaptureEventProfilingInfo = 302,
    GetDefaultQueue = 303,
    BuildNDRange = 304,
    ImageSparseSampleImplicitLod = 305,
    ImageSparseSampleExplicitLod = 306,
    ImageSparseSampleDrefImplicitLod = 307,
    ImageSparseSampleDrefExplicitLod = 308,
    ImageSparseSampleProjImplicitLod = 309,
    ImageSparseSampleProjExplicitLod = 310,
    ImageSparseSampleProjDrefImplicitLod = 311,
    ImageSparseSampleProjDrefExplicitLod = 312,
    ImageSparseFetch = 313,
    ImageSparseGather = 314,
    ImageSparseDrefGather = 315,
    ImageSparseTexelsResident = 316,
    NoLine = 317,
    AtomicFlagTestAndSet = 318,
    AtomicFlagClear = 319,
    ImageSparseRead = 320,
    SizeOf = 321,
    TypePipeStorage = 322,
    ConstantPipeStorage = 323,
    CreatePipeFromPipeStorage = 324,
    GetKernelLocalSizeForSubgroupCount = 325,
    GetKernelMaxNumSubgroups = 326,
    TypeNamedBarrier = 327,
    NamedBarrierInitialize = 328,
    MemoryNamedBarrier = 329,
    ModuleProcessed = 330,
    ExecutionModeId = 331,
    DecorateId = 332,
    GroupNonUniformElect = 333,
    GroupNonUniformAll = 334,
    GroupNonUniformAny = 335,
    GroupNonUniformAllEqual = 336,
    GroupNonUniformBroadcast = 337,
    GroupNonUniformBroadcastFirst = 338,
    GroupNonUniformBallot = 339,
    GroupNonUniformInverseBallot = 340,
    GroupNonUniformBallotBitExtract = 341,
    GroupNonUniformBallotBitCount = 342,
    GroupNonUniformBallotFindLSB = 343,
    GroupNonUniformBallotFindMSB = 344,
    GroupNonUniformShuffle = 345,
    GroupNonUniformShuffleXor = 346,
    GroupNonUniformShuffleUp = 347,
    GroupNonUniformShuffleDown = 348,
    GroupNonUniformIAdd = 349,
    GroupNonUniformFAdd = 350,
    GroupNonUniformIMul = 351,
    GroupNonUniformFMul = 352,
    GroupNonUniformSMin = 353,
    GroupNonUniformUMin = 354,
    GroupNonUniformFMin = 355,
    GroupNonUniformSMax = 356,
    GroupNonUniformUMax = 357,
    GroupNonUniformFMax = 358,
    GroupNonUniformBitwiseAnd = 359,
    GroupNonUniformBitwiseOr = 360,
    GroupNonUniformBitwiseXor = 361,
    GroupNonUniformLogicalAnd = 362,
    GroupNonUniformLogicalOr = 363,
    GroupNonUniformLogicalXor = 364,
    GroupNonUniformQuadBroadcast = 365,
    GroupNonUniformQuadSwap = 366,
    CopyLogical = 400,
    PtrEqual = 401,
    PtrNotEqual = 402,
    PtrDiff = 403,
    ColorAttachmentReadEXT = 4160,
    DepthAttachmentReadEXT = 4161,
    StencilAttachmentReadEXT = 4162,
    TypeTensorARM = 4163,
    TensorReadARM = 4164,
    TensorWriteARM = 4165,
    TensorQuerySizeARM = 4166,
    TerminateInvocation = 4416,
    TypeUntypedPointerKHR = 4417,
    UntypedVariableKHR = 4418,
    UntypedAccessChainKHR = 4419,
    UntypedInBoundsAccessChainKHR = 4420,
    SubgroupBallotKHR = 4421,
    SubgroupFirstInvocationKHR = 4422,
    UntypedPtrAccessChainKHR = 4423,
    UntypedInBoundsPtrAccessChainKHR = 4424,
    UntypedArrayLengthKHR = 4425,
    UntypedPrefetchKHR = 4426,
    SubgroupAllKHR = 4428,
    SubgroupAnyKHR = 4429,
    SubgroupAllEqualKHR = 4430,
    GroupNonUniformRotateKHR = 4431,
    SubgroupReadInvocationKHR = 4432,
    ExtInstWithForwardRefsKHR = 4433,
    TraceRayKHR = 4445,
    ExecuteCallableKHR = 4446,
    ConvertUToAccelerationStructureKHR = 4447,
    IgnoreIntersectionKHR = 4448,
    TerminateRayKHR = 4449,
    SDot = 4450,
    UDot = 4451,
    SUDot = 4452,
    SDotAccSat = 4453,
    UDotAccSat = 4454,
    SUDotAccSat = 4455,
    TypeCooperativeMatrixKHR = 4456,
    CooperativeMatrixLoadKHR = 4457,
    CooperativeMatrixStoreKHR = 4458,
    CooperativeMatrixMulAddKHR = 4459,
    CooperativeMatrixLengthKHR = 4460,
    ConstantCompositeReplicateEXT = 4461,
    SpecConstantCompositeReplicateEXT = 4462,
    CompositeConstructReplicateEXT = 4463,
    TypeRayQueryKHR = 4472,
    RayQueryInitializeKHR = 4473,
    RayQueryTerminateKHR = 4474,
    RayQueryGenerateIntersectionKHR = 4475,
    RayQueryConfirmIntersectionKHR = 4476,
    RayQueryProceedKHR = 4477,
    RayQueryGetIntersectionTypeKHR = 4479,
    GroupIAddNonUniformAMD = 5000,
    GroupFAddNonUniformAMD = 5001,
    GroupFMinNonUniformAMD = 5002,
    GroupUMinNonUniformAMD = 5003,
    GroupSMinNonUniformAMD = 5004,
    GroupFMaxNonUniformAMD = 5005,
    GroupUMaxNonUniformAMD = 5006,
    GroupSMaxNonUniformAMD = 5007,
    FragmentMaskFetchAMD = 5011,
    FragmentFetchAMD = 5012,
    ReadClockKHR = 5056,
    AllocateNodePayloadsAMDX = 5074,
    EnqueueNodePayloadsAMDX = 5075,
    TypeNodePayloadArrayAMDX = 5076,
    FinishWritingNodePayloadAMDX = 5078,
    NodePayloadArrayLengthAMDX = 5090,
    IsNodePayloadValidAMDX = 5101,
    ConstantStringAMDX = 5103,
    SpecConstantStringAMDX = 5104,
    GroupNonUniformQuadAllKHR = 5110,
    GroupNonUniformQuadAnyKHR = 5111,
    TypeHitObjectNV = 5281,
    ImageSampleFootprintNV = 5283,
    TypeCooperativeVectorNV = 5288,
    CooperativeVectorMatrixMulNV = 5289,
    CooperativeVectorOuterProductAccumulateNV = 5290,
    CooperativeVectorReduceSumAccumulateNV = 5291,
    CooperativeVectorMatrixMulAddNV = 5292,
    CooperativeMatrixConvertNV = 5293,
    EmitMeshTasksEXT = 5294,
    SetMeshOutputsEXT = 5295,
    GroupNonUniformPartitionNV = 5296,
    WritePackedPrimitiveIndices4x8NV = 5299,
    ReportIntersectionKHR = 5334,
    IgnoreIntersectionNV = 5335,
    TerminateRayNV = 5336,
    TraceNV = 5337,
    TypeAccelerationStructureKHR = 5341,
    ExecuteCallableNV = 5344,
    TypeCooperativeMatrixNV = 5358,
    CooperativeMatrixLoadNV = 5359,
    CooperativeMatrixStoreNV = 5360,
    CooperativeMatrixMulAddNV = 5361,
    CooperativeMatrixLengthNV = 5362,
    BeginInvocationInterlockEXT = 5364,
    EndInvocationInterlockEXT = 5365,
    TypeTensorLayoutNV = 5370,
    TypeTensorViewNV = 5371,
    DemoteToHelperInvocation = 5380,
    IsHelperInvocationEXT = 5381,
    RawAccessChainNV = 5398,
    ConstantFunctionPointerINTEL = 5600,
    FunctionPointerCallINTEL = 5601,
    AsmTargetINTEL = 5609,
    AsmINTEL = 5610,
    AsmCallINTEL = 5611,
    AtomicFMinEXT = 5614,
    AtomicFMaxEXT = 5615,
    AssumeTrueKHR = 5630,
    ExpectKHR = 5631,
    DecorateString = 5632,
    MemberDecorateString = 5633,
    AtomicFAddEXT = 6035,
    TypeTaskSequenceINTEL = 6199,
}

/// Registry spellings that share a value with a canonical opcode.
///
/// The mnemonic table only carries the canonical spelling; [`Opcode::from_name`]
/// also accepts these.
#[allow(non_upper_case_globals)]
impl Opcode {
    /// `OpDecorateStringGOOGLE`, an alias of [`Opcode::DecorateString`].
    pub const DecorateStringGOOGLE: Self = Self::DecorateString;
    /// `OpMemberDecorateStringGOOGLE`, an alias of [`Opcode::MemberDecorateString`].
    pub const MemberDecorateStringGOOGLE: Self = Self::MemberDecorateString;
    /// `OpTypeAccelerationStructureNV`, an alias of [`Opcode::TypeAccelerationStructureKHR`].
    pub const TypeAccelerationStructureNV: Self = Self::TypeAccelerationStructureKHR;
    /// `OpReportIntersectionNV`, an alias of [`Opcode::ReportIntersectionKHR`].
    pub const ReportIntersectionNV: Self = Self::ReportIntersectionKHR;
    /// `OpDemoteToHelperInvocationEXT`, an alias of [`Opcode::DemoteToHelperInvocation`].
    pub const DemoteToHelperInvocationEXT: Self = Self::DemoteToHelperInvocation;
}

/// Alias mnemonics accepted by [`Opcode::from_name`].
const ALIASES: &[(&str, Opcode)] = &[
    ("OpDecorateStringGOOGLE", Opcode::DecorateString),
    ("OpMemberDecorateStringGOOGLE", Opcode::MemberDecorateString),
    ("OpTypeAccelerationStructureNV", Opcode::TypeAccelerationStructureKHR),
    ("OpReportIntersectionNV", Opcode::ReportIntersectionKHR),
    ("OpDemoteToHelperInvocationEXT", Opcode::DemoteToHelperInvocation),
];

impl Opcode {
    /// Returns the raw 16-bit opcode value.
    #[inline(always)]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Returns the instruction mnemonic, e.g. `"OpTypeInt"`.
    #[inline]
    pub fn name(self) -> &'static str {
        grammar::opcode_name(self)
    }

    /// Resolves a mnemonic (canonical or alias spelling) to its opcode.
    ///
    /// The leading `Op` is optional: `"TypeInt"` and `"OpTypeInt"` both resolve.
    pub fn from_name(name: &str) -> Option<Self> {
        let full;
        let name = if name.starts_with("Op") {
            name
        } else {
            full = format!("Op{name}");
            full.as_str()
        };
        grammar::lookup_opcode_by_name(name)
            .map(InstructionDesc::opcode)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == name)
                    .map(|&(_, op)| op)
            })
    }
}

impl TryFrom<u16> for Opcode {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        Self::from_u16(value).ok_or(Error::UnknownOpcode(u32::from(value)))
    }
}

impl TryFrom<u32> for Opcode {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        u16::try_from(value)
            .ok()
            .and_then(Self::from_u16)
            .ok_or(Error::UnknownOpcode(value))
    }
}

impl From<Opcode> for u16 {
    #[inline]
    fn from(op: Opcode) -> Self {
        op.code()
    }
}

impl From<Opcode> for u32 {
    #[inline]
    fn from(op: Opcode) -> Self {
        u32::from(op.code())
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
