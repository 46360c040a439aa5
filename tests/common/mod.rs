#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use safra_core::{
    config::ConfigManager,
    core::{
        services::{PropriedadeService, SafraService, UsuarioService},
        FarmManager, FarmStore,
    },
    domain::{PerfilUsuario, Propriedade, RecordId, Safra, Usuario},
    storage::JsonStorage,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates isolated managers backed by unique directories for each test.
pub fn setup_test_env() -> (FarmManager, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = JsonStorage::new(Some(base.clone())).expect("create json storage backend");
    let farm_manager = FarmManager::new(Box::new(storage));
    let config_manager =
        ConfigManager::with_base_dir(base).expect("create config manager for temp dir");

    (farm_manager, config_manager)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Owner, property and season ids created by [`seed_farm`].
pub struct Seeded {
    pub usuario: RecordId,
    pub propriedade: RecordId,
    pub safra: RecordId,
}

/// Registers a producer with one property and a 10 ha season covering 2024.
pub fn seed_farm(store: &mut FarmStore) -> Seeded {
    let usuario = UsuarioService::registrar(
        store,
        Usuario::new("João Silva", "joao", "segredo", PerfilUsuario::Produtor)
            .with_cpf("123.456.789-00"),
    )
    .expect("register producer");
    let propriedade = PropriedadeService::add(
        store,
        Propriedade::new(usuario.id, "Fazenda Boa Vista", "Rio Verde - GO"),
    )
    .expect("add property");
    let safra = SafraService::add(
        store,
        Safra::new(
            usuario.id,
            propriedade.id,
            "Soja 2024",
            "Soja",
            "BMX Potência",
            10.0,
            date(2024, 1, 1),
        )
        .with_data_fim(date(2024, 12, 31)),
    )
    .expect("add season");

    Seeded {
        usuario: usuario.id,
        propriedade: propriedade.id,
        safra: safra.id,
    }
}
