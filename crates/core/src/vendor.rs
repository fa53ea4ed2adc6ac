//! Generator id registry.
//!
//! A module's generator word carries the registry id of the producing tool in its high
//! 16 bits. This table mirrors the Khronos registry's generator entries and is looked up
//! by linear scan; ids outside it are normal (any tool may write any id) and resolve to
//! `"Unknown"`.

use tracing::debug;

use crate::common::constants::{GENERATOR_TOOL_SHIFT, GENERATOR_VERSION_MASK, UNKNOWN_GENERATOR};

/// One registry entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VendorTool {
    /// Registry id.
    pub value: u32,
    /// Vendor name.
    pub vendor: &'static str,
    /// Tool name; empty when the vendor registered without one.
    pub tool: &'static str,
    /// Vendor and tool joined for display.
    pub vendor_tool: &'static str,
}

macro_rules! vendor_tools {
    ($({ $value:literal, $vendor:literal, $tool:literal, $vendor_tool:literal },)*) => {
        /// The registry, in id order.
        pub static VENDOR_TOOLS: &[VendorTool] = &[
            $(VendorTool { value: $value, vendor: $vendor, tool: $tool, vendor_tool: $vendor_tool },)*
        ];
    };
}

vendor_tools! {
    {0, "Khronos", "", "Khronos"},
    {1, "LunarG", "", "LunarG"},
    {2, "Valve", "", "Valve"},
    {3, "Codeplay", "", "Codeplay"},
    {4, "NVIDIA", "", "NVIDIA"},
    {5, "ARM", "", "ARM"},
    {6, "Khronos", "LLVM/SPIR-V Translator", "Khronos LLVM/SPIR-V Translator"},
    {7, "Khronos", "SPIR-V Tools Assembler", "Khronos SPIR-V Tools Assembler"},
    {8, "Khronos", "Glslang Reference Front End", "Khronos Glslang Reference Front End"},
    {9, "Qualcomm", "", "Qualcomm"},
    {10, "AMD", "", "AMD"},
    {11, "Intel", "", "Intel"},
    {12, "Imagination", "", "Imagination"},
    {13, "Google", "Shaderc over Glslang", "Google Shaderc over Glslang"},
    {14, "Google", "spiregg", "Google spiregg"},
    {15, "Google", "rspirv", "Google rspirv"},
    {16, "X-LEGEND", "Mesa-IR/SPIR-V Translator", "X-LEGEND Mesa-IR/SPIR-V Translator"},
    {17, "Khronos", "SPIR-V Tools Linker", "Khronos SPIR-V Tools Linker"},
    {18, "Wine", "VKD3D Shader Compiler", "Wine VKD3D Shader Compiler"},
    {19, "Tellusim", "Clay Shader Compiler", "Tellusim Clay Shader Compiler"},
    {20, "W3C WebGPU Group", "WHLSL Shader Translator", "W3C WebGPU Group WHLSL Shader Translator"},
    {21, "Google", "Clspv", "Google Clspv"},
    {22, "Google", "MLIR SPIR-V Serializer", "Google MLIR SPIR-V Serializer"},
    {23, "Google", "Tint Compiler", "Google Tint Compiler"},
    {24, "Google", "ANGLE Shader Compiler", "Google ANGLE Shader Compiler"},
    {25, "Netease Games", "Messiah Shader Compiler", "Netease Games Messiah Shader Compiler"},
    {26, "Xenia", "Xenia Emulator Microcode Translator", "Xenia Xenia Emulator Microcode Translator"},
    {27, "Embark Studios", "Rust GPU Compiler Backend", "Embark Studios Rust GPU Compiler Backend"},
    {28, "gfx-rs community", "Naga", "gfx-rs community Naga"},
    {29, "Mikkosoft Productions", "MSP Shader Compiler", "Mikkosoft Productions MSP Shader Compiler"},
    {30, "SpvGenTwo community", "SpvGenTwo SPIR-V IR Tools", "SpvGenTwo community SpvGenTwo SPIR-V IR Tools"},
    {31, "Google", "Skia SkSL", "Google Skia SkSL"},
    {32, "TornadoVM", "Beehive SPIRV Toolkit", "TornadoVM Beehive SPIRV Toolkit"},
}

/// Finds the registry entry for `generator`.
pub fn lookup_generator(generator: u32) -> Option<&'static VendorTool> {
    VENDOR_TOOLS.iter().find(|entry| entry.value == generator)
}

/// Returns the display name for a generator id, or `"Unknown"` if it is not registered.
///
/// `generator` is the tool id alone; use [`split_generator`] on a raw header word first.
pub fn generator_name(generator: u32) -> &'static str {
    lookup_generator(generator).map_or_else(
        || {
            debug!(generator, "unregistered generator id");
            UNKNOWN_GENERATOR
        },
        |entry| entry.vendor_tool,
    )
}

/// Splits a module header's generator word into `(tool_id, tool_version)`.
#[inline]
pub const fn split_generator(word: u32) -> (u16, u16) {
    (
        (word >> GENERATOR_TOOL_SHIFT) as u16,
        (word & GENERATOR_VERSION_MASK) as u16,
    )
}
