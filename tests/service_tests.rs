mod common;

use common::{date, seed_farm};
use safra_core::core::{
    services::{
        CustoVariavelService, OperacaoService, PropriedadeService, SafraService, ServiceError,
        UsuarioService,
    },
    FarmStore,
};
use safra_core::domain::{
    CustoVariavel, OperacaoCampo, PerfilUsuario, Propriedade, Safra, SafraPatch,
    TipoCustoVariavel, TipoOperacao, Usuario, UsuarioPatch,
};

#[test]
fn duplicate_username_leaves_users_unchanged() {
    let mut store = FarmStore::new();
    seed_farm(&mut store);
    let before = UsuarioService::list(&store).len();

    let err = UsuarioService::registrar(
        &mut store,
        Usuario::new("Outro João", "joao", "abc", PerfilUsuario::Tecnico)
            .with_email("outro@exemplo.com"),
    )
    .expect_err("duplicate username");

    assert!(matches!(err, ServiceError::DuplicateUser(_)));
    assert_eq!(UsuarioService::list(&store).len(), before);
}

#[test]
fn registration_needs_cpf_or_email() {
    let mut store = FarmStore::new();
    let err = UsuarioService::registrar(
        &mut store,
        Usuario::new("Maria", "maria", "abc", PerfilUsuario::Produtor),
    )
    .expect_err("no identifier");
    assert!(matches!(err, ServiceError::MissingIdentifier));
    assert!(UsuarioService::list(&store).is_empty());
}

#[test]
fn login_matches_username_and_password() {
    let mut store = FarmStore::new();
    let ids = seed_farm(&mut store);

    let user = UsuarioService::autenticar(&store, "joao", "segredo").expect("login");
    assert_eq!(user.id, ids.usuario);
    assert!(UsuarioService::autenticar(&store, "joao", "errada").is_none());
    assert!(UsuarioService::autenticar(&store, "ninguem", "segredo").is_none());
}

#[test]
fn update_cannot_take_an_existing_username() {
    let mut store = FarmStore::new();
    seed_farm(&mut store);
    let maria = UsuarioService::registrar(
        &mut store,
        Usuario::new("Maria", "maria", "abc", PerfilUsuario::Tecnico).with_email("m@x.com"),
    )
    .expect("register maria");

    let patch = UsuarioPatch {
        nome_de_usuario: Some("joao".into()),
        ..Default::default()
    };
    assert!(UsuarioService::update(&mut store, maria.id, patch).is_err());
    assert_eq!(
        UsuarioService::get(&store, maria.id)
            .expect("maria")
            .nome_de_usuario,
        "maria"
    );
}

#[test]
fn inactivation_is_reversible() {
    let mut store = FarmStore::new();
    let ids = seed_farm(&mut store);
    let original = SafraService::get(&store, ids.safra).cloned().expect("season");

    let inactive = SafraService::inativar(&mut store, ids.safra).expect("inactivate");
    assert!(!inactive.ativa);
    assert!(SafraService::list_ativas(&store, ids.usuario).is_empty());
    assert_eq!(SafraService::list_by_usuario(&store, ids.usuario).len(), 1);

    let restored = SafraService::reativar(&mut store, ids.safra).expect("reactivate");
    assert_eq!(restored, original);
}

#[test]
fn season_must_sit_on_an_owned_property() {
    let mut store = FarmStore::new();
    let ids = seed_farm(&mut store);
    let maria = UsuarioService::registrar(
        &mut store,
        Usuario::new("Maria", "maria", "abc", PerfilUsuario::Produtor).with_email("m@x.com"),
    )
    .expect("register maria");

    let alheia = Safra::new(
        maria.id,
        ids.propriedade,
        "Milho",
        "Milho",
        "AG",
        3.0,
        date(2024, 2, 1),
    );
    assert!(SafraService::add(&mut store, alheia).is_err());

    let sem_area = Safra::new(
        ids.usuario,
        ids.propriedade,
        "Milho",
        "Milho",
        "AG",
        0.0,
        date(2024, 2, 1),
    );
    assert!(SafraService::add(&mut store, sem_area).is_err());
}

#[test]
fn patch_clears_optional_end_date() {
    let mut store = FarmStore::new();
    let ids = seed_farm(&mut store);

    let patch = SafraPatch {
        data_fim: Some(None),
        ..Default::default()
    };
    let updated = SafraService::update(&mut store, ids.safra, patch)
        .expect("valid patch")
        .expect("season exists");
    assert_eq!(updated.data_fim, None);
    assert_eq!(updated.nome, "Soja 2024");

    let missing = SafraService::update(&mut store, 999, SafraPatch::default()).expect("no error");
    assert!(missing.is_none());
}

#[test]
fn ids_are_never_reused_and_deletes_do_not_cascade() {
    let mut store = FarmStore::new();
    let ids = seed_farm(&mut store);

    let first = OperacaoService::add(
        &mut store,
        OperacaoCampo::new(ids.safra, date(2024, 2, 1), TipoOperacao::Plantio, 10.0),
    )
    .expect("first operation");
    OperacaoService::remove(&mut store, first.id).expect("remove");
    let second = OperacaoService::add(
        &mut store,
        OperacaoCampo::new(ids.safra, date(2024, 2, 2), TipoOperacao::Plantio, 10.0),
    )
    .expect("second operation");
    assert!(second.id > first.id);

    CustoVariavelService::add(
        &mut store,
        CustoVariavel::new(
            ids.safra,
            date(2024, 2, 3),
            TipoCustoVariavel::Transporte,
            "Frete",
            90.0,
        ),
    )
    .expect("add cost");

    let removed = PropriedadeService::remove(&mut store, ids.propriedade).expect("remove");
    assert_eq!(removed.id, ids.propriedade);
    assert!(SafraService::get(&store, ids.safra).is_some());
    assert_eq!(CustoVariavelService::list_by_safra(&store, ids.safra).len(), 1);

    let nova = PropriedadeService::add(
        &mut store,
        Propriedade::new(ids.usuario, "Sítio Novo", "Jataí - GO"),
    )
    .expect("new property");
    assert!(nova.id > ids.propriedade);
}
