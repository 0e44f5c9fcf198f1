//! The closed set of reference-data tools
//!
//! Every advertised tool is one [`GoslingTool`] variant. Its wire name,
//! description and embedded source are all declared by exhaustive matches
//! on the variant, so a new tool cannot be advertised without data (or the
//! other way round).

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How an embedded source file is turned into a dataset value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Structured JSON document.
    Json,
    /// Markdown document served as a single string value.
    Markdown,
}

/// Reference-data tool identifiers, in advertisement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GoslingTool {
    // MotherGoose
    MothergooseApiEndpoints,
    MothergooseCeleryTasks,
    MothergooseModels,
    MothergooseServices,
    MothergooseEnvVars,
    // UglyFox
    UglyfoxCeleryTasks,
    UglyfoxConfigSchema,
    UglyfoxEnvVars,
    // Gosling CLI
    GoslingCommands,
    FlyLanguageReference,
    FlyExamples,
    // Compute Module
    ComputeModuleVariables,
    ComputeModuleOutputs,
    ComputeModuleProviders,
    // Cross-cutting
    SecretUriSchemes,
    DatabaseSchema,
    ArchitectureOverview,
    // Steering documents
    SteeringProduct,
    SteeringStructure,
    SteeringTech,
}

impl GoslingTool {
    /// All tools in the order they are advertised.
    pub const ALL: [GoslingTool; 20] = [
        GoslingTool::MothergooseApiEndpoints,
        GoslingTool::MothergooseCeleryTasks,
        GoslingTool::MothergooseModels,
        GoslingTool::MothergooseServices,
        GoslingTool::MothergooseEnvVars,
        GoslingTool::UglyfoxCeleryTasks,
        GoslingTool::UglyfoxConfigSchema,
        GoslingTool::UglyfoxEnvVars,
        GoslingTool::GoslingCommands,
        GoslingTool::FlyLanguageReference,
        GoslingTool::FlyExamples,
        GoslingTool::ComputeModuleVariables,
        GoslingTool::ComputeModuleOutputs,
        GoslingTool::ComputeModuleProviders,
        GoslingTool::SecretUriSchemes,
        GoslingTool::DatabaseSchema,
        GoslingTool::ArchitectureOverview,
        GoslingTool::SteeringProduct,
        GoslingTool::SteeringStructure,
        GoslingTool::SteeringTech,
    ];

    /// Wire name advertised by `tools/list`.
    pub fn name(&self) -> &'static str {
        match self {
            GoslingTool::MothergooseApiEndpoints => "get_mothergoose_api_endpoints",
            GoslingTool::MothergooseCeleryTasks => "get_mothergoose_celery_tasks",
            GoslingTool::MothergooseModels => "get_mothergoose_models",
            GoslingTool::MothergooseServices => "get_mothergoose_services",
            GoslingTool::MothergooseEnvVars => "get_mothergoose_env_vars",
            GoslingTool::UglyfoxCeleryTasks => "get_uglyfox_celery_tasks",
            GoslingTool::UglyfoxConfigSchema => "get_uglyfox_config_schema",
            GoslingTool::UglyfoxEnvVars => "get_uglyfox_env_vars",
            GoslingTool::GoslingCommands => "get_gosling_commands",
            GoslingTool::FlyLanguageReference => "get_fly_language_reference",
            GoslingTool::FlyExamples => "get_fly_examples",
            GoslingTool::ComputeModuleVariables => "get_compute_module_variables",
            GoslingTool::ComputeModuleOutputs => "get_compute_module_outputs",
            GoslingTool::ComputeModuleProviders => "get_compute_module_providers",
            GoslingTool::SecretUriSchemes => "get_secret_uri_schemes",
            GoslingTool::DatabaseSchema => "get_database_schema",
            GoslingTool::ArchitectureOverview => "get_architecture_overview",
            GoslingTool::SteeringProduct => "get_steering_product",
            GoslingTool::SteeringStructure => "get_steering_structure",
            GoslingTool::SteeringTech => "get_steering_tech",
        }
    }

    /// Human-readable description shown to the assistant.
    pub fn description(&self) -> &'static str {
        match self {
            GoslingTool::MothergooseApiEndpoints => {
                "List all MotherGoose REST API endpoints with methods, paths, descriptions, and auth requirements."
            }
            GoslingTool::MothergooseCeleryTasks => {
                "List all MotherGoose Celery tasks with names, queues, priorities, and descriptions."
            }
            GoslingTool::MothergooseModels => {
                "Get Pydantic model schemas for Runner, EggConfig, SyncHistory, DeploymentPlan, AuditLog."
            }
            GoslingTool::MothergooseServices => {
                "List all MotherGoose service classes with their responsibilities and key methods."
            }
            GoslingTool::MothergooseEnvVars => {
                "Get all MOTHERGOOSE_* environment variable definitions with types and descriptions."
            }
            GoslingTool::UglyfoxCeleryTasks => {
                "List all UglyFox Celery tasks: health checks, pruning, lifecycle management."
            }
            GoslingTool::UglyfoxConfigSchema => {
                "Get the UF/config.fly schema: pruning policies, runner conditions, Apex/Nadir pool rules."
            }
            GoslingTool::UglyfoxEnvVars => {
                "Get all UGLYFOX_* environment variable definitions with types and descriptions."
            }
            GoslingTool::GoslingCommands => {
                "Get all Gosling CLI commands with flags, usage patterns, and examples."
            }
            GoslingTool::FlyLanguageReference => {
                "Get the .fly language reference: block types, attributes, type system, and validation rules."
            }
            GoslingTool::FlyExamples => {
                "Get example .fly files for egg, eggsbucket, job, uglyfox, and mothergoose blocks."
            }
            GoslingTool::ComputeModuleVariables => {
                "Get all Terraform/OpenTofu input variables for the Compute Module (AWS + Yandex Cloud)."
            }
            GoslingTool::ComputeModuleOutputs => {
                "Get Compute Module output values: hostname, public_ip, private_ip, id."
            }
            GoslingTool::ComputeModuleProviders => {
                "Get provider version constraints for the Compute Module (yandex, aws, random)."
            }
            GoslingTool::SecretUriSchemes => {
                "Get secret URI scheme reference: yc-lockbox://, aws-sm://, vault:// formats and usage."
            }
            GoslingTool::DatabaseSchema => {
                "Get all YDB/DynamoDB table schemas: runners, egg_configs, sync_history, deployment_plans, audit_logs, tofu_versions, gosling_version."
            }
            GoslingTool::ArchitectureOverview => {
                "Get a high-level architecture overview: system flow, services, deployment mechanisms, cloud targets."
            }
            GoslingTool::SteeringProduct => {
                "Get the product steering document: services, key concepts, and Nest repository layout."
            }
            GoslingTool::SteeringStructure => {
                "Get the project structure steering document: repository layouts and conventions."
            }
            GoslingTool::SteeringTech => {
                "Get the tech stack steering document: frameworks, code quality tools, and common commands."
            }
        }
    }

    /// Embedded source text and how to interpret it.
    pub fn source(&self) -> (SourceFormat, &'static str) {
        use SourceFormat::{Json, Markdown};

        match self {
            GoslingTool::MothergooseApiEndpoints => {
                (Json, include_str!("../data/mothergoose_api_endpoints.json"))
            }
            GoslingTool::MothergooseCeleryTasks => {
                (Json, include_str!("../data/mothergoose_celery_tasks.json"))
            }
            GoslingTool::MothergooseModels => (Json, include_str!("../data/mothergoose_models.json")),
            GoslingTool::MothergooseServices => {
                (Json, include_str!("../data/mothergoose_services.json"))
            }
            GoslingTool::MothergooseEnvVars => {
                (Json, include_str!("../data/mothergoose_env_vars.json"))
            }
            GoslingTool::UglyfoxCeleryTasks => {
                (Json, include_str!("../data/uglyfox_celery_tasks.json"))
            }
            GoslingTool::UglyfoxConfigSchema => {
                (Json, include_str!("../data/uglyfox_config_schema.json"))
            }
            GoslingTool::UglyfoxEnvVars => (Json, include_str!("../data/uglyfox_env_vars.json")),
            GoslingTool::GoslingCommands => (Json, include_str!("../data/gosling_commands.json")),
            GoslingTool::FlyLanguageReference => {
                (Json, include_str!("../data/fly_language_reference.json"))
            }
            GoslingTool::FlyExamples => (Json, include_str!("../data/fly_examples.json")),
            GoslingTool::ComputeModuleVariables => {
                (Json, include_str!("../data/compute_module_variables.json"))
            }
            GoslingTool::ComputeModuleOutputs => {
                (Json, include_str!("../data/compute_module_outputs.json"))
            }
            GoslingTool::ComputeModuleProviders => {
                (Json, include_str!("../data/compute_module_providers.json"))
            }
            GoslingTool::SecretUriSchemes => (Json, include_str!("../data/secret_uri_schemes.json")),
            GoslingTool::DatabaseSchema => (Json, include_str!("../data/database_schema.json")),
            GoslingTool::ArchitectureOverview => {
                (Json, include_str!("../data/architecture_overview.json"))
            }
            GoslingTool::SteeringProduct => (Markdown, include_str!("../data/steering_product.md")),
            GoslingTool::SteeringStructure => {
                (Markdown, include_str!("../data/steering_structure.md"))
            }
            GoslingTool::SteeringTech => (Markdown, include_str!("../data/steering_tech.md")),
        }
    }
}

impl FromStr for GoslingTool {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        GoslingTool::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| Error::UnknownTool {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for GoslingTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
