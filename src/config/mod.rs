//! Run configuration: target environment, universal limits, relaxation flags

use crate::input::InputSource;

/// Target environment selecting which validation rule dialect applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetEnv {
    /// Core 1.0 rules
    Core10,
    /// Core 1.1 rules
    Core11,
    /// Core 1.2 rules
    Core12,
    /// GPU 1.0 profile, layered on Core 1.0
    Gpu10,
}

/// Environment used when `--target-env` is not given
pub const DEFAULT_TARGET_ENV: TargetEnv = TargetEnv::Core12;

impl TargetEnv {
    /// All recognized environments, in the order `--version` lists them
    pub const ALL: [TargetEnv; 4] = [
        TargetEnv::Core10,
        TargetEnv::Core11,
        TargetEnv::Core12,
        TargetEnv::Gpu10,
    ];

    /// Command-line spelling of this environment
    pub fn name(self) -> &'static str {
        match self {
            TargetEnv::Core10 => "core1.0",
            TargetEnv::Core11 => "core1.1",
            TargetEnv::Core12 => "core1.2",
            TargetEnv::Gpu10 => "gpu1.0",
        }
    }

    /// Human-readable description printed by `--version`
    pub fn description(self) -> &'static str {
        match self {
            TargetEnv::Core10 => "Core 1.0",
            TargetEnv::Core11 => "Core 1.1",
            TargetEnv::Core12 => "Core 1.2",
            TargetEnv::Gpu10 => "GPU 1.0 (Core 1.0 plus GPU profile rules)",
        }
    }

    /// Match a command-line spelling against the recognized environments
    pub fn from_name(name: &str) -> Option<TargetEnv> {
        TargetEnv::ALL.iter().copied().find(|env| env.name() == name)
    }
}

/// Default ceiling for members per structure
pub const DEFAULT_MAX_STRUCT_MEMBERS: u32 = 16383;
/// Default ceiling for structure nesting depth
pub const DEFAULT_MAX_STRUCT_DEPTH: u32 = 255;
/// Default ceiling for local variables per function
pub const DEFAULT_MAX_LOCAL_VARIABLES: u32 = 524_287;
/// Default ceiling for global variables per module
pub const DEFAULT_MAX_GLOBAL_VARIABLES: u32 = 65535;
/// Default ceiling for branches per switch
pub const DEFAULT_MAX_SWITCH_BRANCHES: u32 = 16383;
/// Default ceiling for arguments per function
pub const DEFAULT_MAX_FUNCTION_ARGS: u32 = 255;
/// Default ceiling for control-flow nesting depth
pub const DEFAULT_MAX_CONTROL_FLOW_NESTING_DEPTH: u32 = 1023;
/// Default ceiling for indexes per access chain
pub const DEFAULT_MAX_ACCESS_CHAIN_INDEXES: u32 = 255;

/// Limit category adjustable through the `--max-*` option family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitCategory {
    StructMembers,
    StructDepth,
    LocalVariables,
    GlobalVariables,
    SwitchBranches,
    FunctionArgs,
    ControlFlowNestingDepth,
    AccessChainIndexes,
}

impl LimitCategory {
    /// Number of limit categories
    pub const COUNT: usize = 8;

    /// All categories, in the order the usage text lists them
    pub const ALL: [LimitCategory; Self::COUNT] = [
        LimitCategory::StructMembers,
        LimitCategory::StructDepth,
        LimitCategory::LocalVariables,
        LimitCategory::GlobalVariables,
        LimitCategory::SwitchBranches,
        LimitCategory::FunctionArgs,
        LimitCategory::ControlFlowNestingDepth,
        LimitCategory::AccessChainIndexes,
    ];

    /// The full `--max-*` option spelling for this category
    pub fn option_name(self) -> &'static str {
        match self {
            LimitCategory::StructMembers => "--max-struct-members",
            LimitCategory::StructDepth => "--max-struct-depth",
            LimitCategory::LocalVariables => "--max-local-variables",
            LimitCategory::GlobalVariables => "--max-global-variables",
            LimitCategory::SwitchBranches => "--max-switch-branches",
            LimitCategory::FunctionArgs => "--max-function-args",
            LimitCategory::ControlFlowNestingDepth => "--max-control-flow-nesting-depth",
            LimitCategory::AccessChainIndexes => "--max-access-chain-indexes",
        }
    }

    /// Ceiling applied when no override is given on the command line
    pub fn default_limit(self) -> u32 {
        match self {
            LimitCategory::StructMembers => DEFAULT_MAX_STRUCT_MEMBERS,
            LimitCategory::StructDepth => DEFAULT_MAX_STRUCT_DEPTH,
            LimitCategory::LocalVariables => DEFAULT_MAX_LOCAL_VARIABLES,
            LimitCategory::GlobalVariables => DEFAULT_MAX_GLOBAL_VARIABLES,
            LimitCategory::SwitchBranches => DEFAULT_MAX_SWITCH_BRANCHES,
            LimitCategory::FunctionArgs => DEFAULT_MAX_FUNCTION_ARGS,
            LimitCategory::ControlFlowNestingDepth => DEFAULT_MAX_CONTROL_FLOW_NESTING_DEPTH,
            LimitCategory::AccessChainIndexes => DEFAULT_MAX_ACCESS_CHAIN_INDEXES,
        }
    }

    /// Match a full option token against the known categories
    pub fn from_option_name(option: &str) -> Option<LimitCategory> {
        LimitCategory::ALL
            .iter()
            .copied()
            .find(|category| category.option_name() == option)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Numeric limits and relaxation flags handed to the validation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorOptions {
    limits: [u32; LimitCategory::COUNT],
    pub relax_logical_pointer: bool,
    pub relax_struct_store: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        let mut limits = [0; LimitCategory::COUNT];
        for category in LimitCategory::ALL {
            limits[category.index()] = category.default_limit();
        }
        Self {
            limits,
            relax_logical_pointer: false,
            relax_struct_store: false,
        }
    }
}

impl ValidatorOptions {
    /// Overwrite the ceiling for one limit category. Later calls for the
    /// same category replace earlier ones.
    pub fn set_universal_limit(&mut self, category: LimitCategory, limit: u32) {
        self.limits[category.index()] = limit;
    }

    /// Current ceiling for one limit category
    pub fn universal_limit(&self, category: LimitCategory) -> u32 {
        self.limits[category.index()]
    }
}

/// Everything governing one validation run, assembled by the option parser
/// and fixed before any input byte is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub target_env: TargetEnv,
    pub options: ValidatorOptions,
    pub input: InputSource,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_env: DEFAULT_TARGET_ENV,
            options: ValidatorOptions::default(),
            input: InputSource::Stdin,
        }
    }
}
