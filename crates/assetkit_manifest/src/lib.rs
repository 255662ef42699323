//! Fixed asset manifest for the website build.
//!
//! Source folder names are the contract with whoever drops files into
//! `recursos/`; renaming them there breaks the matching entry here.

use assetkit_io_fs::{SpecAssetManifest, SpecAssetMapping, SpecBulkCopyRule};

/// Source tree, relative to the working directory.
pub const C_DIR_SOURCE_ROOT: &str = "recursos";
/// Destination tree consumed by the deploy.
pub const C_DIR_DESTINATION_ROOT: &str = "public/assets";

pub const L_FOLDERS_DESTINATION: [&str; 6] = [
    "logos",
    "team",
    "clients",
    "portfolio",
    "before-after",
    "feedbacks",
];

/// `(source, destination)`, relative to the two roots above.
pub const L_MAPPINGS_EXPLICIT: [(&str, &str); 10] = [
    (
        "NOSSA LOGO/MÉTRICA - LOGO HORIZONTAL_1.png",
        "logos/logo-horizontal.png",
    ),
    (
        "RESPONSAVEIS PELA MÉTRICA/FOTO- PESSOAS A FRENTE DA MÉTRICA.png",
        "team/team.png",
    ),
    (
        "FEEDBACKS/FEEDBACK CLINICA ODONTOLOGICA.jpeg",
        "feedbacks/feedback-odontologica.jpeg",
    ),
    (
        "FEEDBACKS/Veiculo vendido com investimento de R$13,28.jpg",
        "feedbacks/venda-veiculo.jpg",
    ),
    (
        "FEEDBACKS/FEEDBACK-TRAFEGO PAGO GARAGEM DE VEICULO.jpeg",
        "feedbacks/feedback-garagem.jpeg",
    ),
    (
        "ARTES/ACM/07-10-25 - ACM - CUIDAR DAS PESSOAS.jpg",
        "portfolio/07-10-25 - ACM - CUIDAR DAS PESSOAS.jpg",
    ),
    (
        "ARTES/ACM/25-09-25 - ACM - PLANEJAMENTO.png",
        "portfolio/art-1.png",
    ),
    (
        "LOGOS FEITAS/EASYFIT - APRESENTAÇÃO LOGO 2.png",
        "portfolio/EASYFIT - APRESENTAÇÃO LOGO 2.png",
    ),
    (
        "LOGOS FEITAS/CASA DO MACARRÃO - APRESENTAÇÃO LOGO 2.png",
        "portfolio/CASA DO MACARRÃO - APRESENTAÇÃO LOGO 2.png",
    ),
    (
        "LOGOS FEITAS/WhatsApp Image 2026-01-15 at 18.00.47.jpeg",
        "portfolio/WhatsApp Image 2026-01-15 at 18.00.47.jpeg",
    ),
];

/// `(label, source dir, destination dir, glob)`.
pub const L_RULES_BULK: [(&str, &str, &str, &str); 3] = [
    (
        "client logos",
        "Empresas que ja confiaram no nosso trabalho",
        "clients",
        "*.png",
    ),
    ("before and after", "PERFIS ANTES E DEPOIS", "before-after", "*.jpeg"),
    ("portfolio art", "ARTES/ACM", "portfolio", "*.jpg"),
];

/// Build the manifest from the tables above. Paths stay relative; the
/// organizer resolves them against its base directory.
pub fn manifest_default() -> SpecAssetManifest {
    SpecAssetManifest {
        path_dir_src_root: C_DIR_SOURCE_ROOT.into(),
        path_dir_dst_root: C_DIR_DESTINATION_ROOT.into(),
        folders: L_FOLDERS_DESTINATION
            .iter()
            .map(|c_folder| c_folder.to_string())
            .collect(),
        mappings: L_MAPPINGS_EXPLICIT
            .iter()
            .map(|(c_src, c_dst)| SpecAssetMapping::new(*c_src, *c_dst))
            .collect(),
        rules_bulk: L_RULES_BULK
            .iter()
            .map(|(c_label, c_src, c_dst, c_pattern)| {
                SpecBulkCopyRule::glob(c_label, *c_src, *c_dst, c_pattern)
            })
            .collect(),
    }
}
