pub mod benfeitoria;
pub mod colheita;
pub mod common;
pub mod custo;
pub mod maquinario;
pub mod operacao;
pub mod produto;
pub mod propriedade;
pub mod safra;
pub mod usuario;

pub use benfeitoria::{Benfeitoria, BenfeitoriaPatch};
pub use colheita::{Colheita, ColheitaPatch, UnidadeColheita};
pub use common::{
    Displayable, Financiado, Financiamento, Identifiable, NamedEntity, Patch, RecordId,
};
pub use custo::{
    CustoFixo, CustoFixoPatch, CustoVariavel, CustoVariavelPatch, TipoCustoFixo,
    TipoCustoVariavel,
};
pub use maquinario::{Maquinario, MaquinarioPatch};
pub use operacao::{
    Clima, CondicoesClimaticas, OperacaoCampo, OperacaoCampoPatch, TipoOperacao, Vento,
};
pub use produto::{Produto, UnidadeProduto};
pub use propriedade::{Propriedade, PropriedadePatch};
pub use safra::{AnaliseSolo, Safra, SafraPatch};
pub use usuario::{PerfilUsuario, Usuario, UsuarioPatch};
