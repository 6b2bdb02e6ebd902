//! Built-in registry descriptors
//!
//! The three compras.gov.br registries this tool knows how to harvest.
//! Parameter names and fixed flags mirror the published API.

use super::EndpointDescriptor;

/// Default page size for the procurement-plan detail registry
pub const DEFAULT_PGC_PAGE_SIZE: u32 = 10;

/// UASG organizational units registry
///
/// Restricted to active units that use the SISG procurement system, which is
/// the slice the downstream filtering expects.
pub fn uasg() -> EndpointDescriptor {
    EndpointDescriptor::new("uasg", "modulo-uasg/1_consultarUasg")
        .with_fixed_param("usoSisg", "true")
        .with_fixed_param("statusUasg", "true")
}

/// Organization registration records registry
pub fn orgao() -> EndpointDescriptor {
    EndpointDescriptor::new("orgao", "modulo-uasg/2_consultarOrgao")
        .with_fixed_param("statusOrgao", "true")
}

/// Procurement-plan line items, scoped per organization CNPJ
pub fn pgc_detalhe(year: i32, page_size: u32) -> EndpointDescriptor {
    EndpointDescriptor::new("pgc", "modulo-pgc/1_consultarPgcDetalhe")
        .with_page_size("tamanhoPagina", page_size)
        .with_key_param("orgao")
        .with_fixed_param("anoPcaProjetoCompra", year.to_string())
}

/// Names of the built-in registries
pub fn builtin_names() -> Vec<&'static str> {
    vec!["uasg", "orgao", "pgc"]
}
