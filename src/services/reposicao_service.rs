// src/services/reposicao_service.rs

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ProdutoRepository, ReposicaoRepository},
    models::{
        produto::Produto,
        reposicao::{
            AcaoPrioritaria, AcaoRecomendada, ConfiguracaoReposicao, DiasRestantes, ItemPainel,
            LocalAcao, PainelReposicao, ParametrosReposicao, Prioridade, ReposicaoFull,
            ReposicaoLocal, StatusReposicao, SugestaoReposicao, TipoAcao,
        },
    },
};

// ---
// Núcleo puro do cálculo de reposição
// ---
// Tudo abaixo é função de ParametrosReposicao -> SugestaoReposicao, sem I/O e
// sem estado. Os repositórios só entram na montagem do snapshot, mais abaixo.

/// Demanda média diária = total vendido na janela / dias da janela.
/// Janela inválida já foi barrada na borda (validação); aqui degrada para zero.
pub fn calcular_media_diaria(total_vendido: i64, janela_dias: i32) -> Decimal {
    if janela_dias <= 0 {
        return Decimal::ZERO;
    }
    Decimal::from(total_vendido.max(0)) / Decimal::from(janela_dias)
}

// Fração de unidade de demanda ainda consome uma unidade inteira.
fn arredonda_para_cima(valor: Decimal) -> i64 {
    valor.ceil().to_i64().unwrap_or(i64::MAX)
}

/// Ponto de reposição do caminho Local (compra): cobre o lead time do
/// fornecedor mais a cobertura mínima, com o piso de segurança.
pub fn ponto_reposicao_local(media_diaria: Decimal, params: &ParametrosReposicao) -> i64 {
    let dias = i64::from(params.lead_time_fornecedor_dias) + i64::from(params.cobertura_minima_dias);
    arredonda_para_cima(media_diaria * Decimal::from(dias)) + params.estoque_seguranca
}

/// Ponto de reposição do caminho Full (transferência): só precisa cobrir o
/// prazo de liberação, porque a mercadoria já é nossa e está no depósito local.
pub fn ponto_reposicao_full(media_diaria: Decimal, params: &ParametrosReposicao) -> i64 {
    let dias = i64::from(params.lead_time_liberacao_full_dias);
    arredonda_para_cima(media_diaria * Decimal::from(dias)) + params.estoque_seguranca
}

/// Quantos dias o saldo atual aguenta no ritmo de venda atual.
/// Demanda zero não divide: vira a variante Ilimitado.
pub fn dias_restantes(estoque: i64, media_diaria: Decimal) -> DiasRestantes {
    if media_diaria <= Decimal::ZERO {
        return DiasRestantes::Ilimitado;
    }
    let dias = (Decimal::from(estoque.max(0)) / media_diaria)
        .floor()
        .to_i64()
        .unwrap_or(i64::MAX);
    DiasRestantes::Dias(dias)
}

// Quantidade que deixa um local com a cobertura mínima desejada.
fn alvo_cobertura(media_diaria: Decimal, params: &ParametrosReposicao) -> i64 {
    arredonda_para_cima(media_diaria * Decimal::from(params.cobertura_minima_dias))
        + params.estoque_seguranca
}

fn classificar_status(necessaria: bool, dias: DiasRestantes, lead_dias: i32) -> StatusReposicao {
    if !necessaria {
        return StatusReposicao::Ok;
    }
    match dias {
        // Estoque acaba antes da mercadoria chegar: crítico.
        DiasRestantes::Dias(d) if d < i64::from(lead_dias) => StatusReposicao::Critico,
        _ => StatusReposicao::Atencao,
    }
}

fn prioridade_de(status: StatusReposicao) -> Prioridade {
    match status {
        StatusReposicao::Critico => Prioridade::Urgente,
        StatusReposicao::Atencao => Prioridade::Importante,
        StatusReposicao::Ok => Prioridade::Normal,
    }
}

fn avaliar_caminho_full(params: &ParametrosReposicao, media_diaria: Decimal) -> ReposicaoFull {
    let ponto = ponto_reposicao_full(media_diaria, params);
    let dias = dias_restantes(params.estoque_full, media_diaria);
    let necessaria = params.estoque_full <= ponto;

    // Quantidade reportada é a necessidade real, sem truncar pelo saldo local;
    // a viabilidade decide apenas a ação recomendada (ver DESIGN.md).
    let quantidade_sugerida = if necessaria {
        (alvo_cobertura(media_diaria, params) - params.estoque_full).max(0)
    } else {
        0
    };
    let tem_estoque_local = params.estoque_local >= quantidade_sugerida;

    let acao_recomendada = if !necessaria {
        AcaoRecomendada::Nenhuma
    } else if tem_estoque_local {
        AcaoRecomendada::Transferir
    } else {
        AcaoRecomendada::AguardarCompra
    };

    ReposicaoFull {
        necessaria,
        ponto_reposicao: ponto,
        dias_restantes: dias,
        quantidade_sugerida,
        tem_estoque_local,
        status: classificar_status(necessaria, dias, params.lead_time_liberacao_full_dias),
        acao_recomendada,
    }
}

fn avaliar_caminho_local(
    params: &ParametrosReposicao,
    media_diaria: Decimal,
    faltante_full: i64,
) -> ReposicaoLocal {
    let ponto = ponto_reposicao_local(media_diaria, params);
    let dias = dias_restantes(params.estoque_local, media_diaria);

    // Política: só o saldo LOCAL conta aqui. O estoque Full já está
    // comprometido com o marketplace e não atende venda local.
    let necessaria = params.estoque_local <= ponto;

    let quantidade_sugerida = if necessaria {
        (alvo_cobertura(media_diaria, params) - params.estoque_local).max(0)
    } else {
        0
    };

    // Da compra sugerida, separa o que o caminho Full não conseguiu transferir.
    let quantidade_para_full = faltante_full.min(quantidade_sugerida);
    let quantidade_para_local = quantidade_sugerida - quantidade_para_full;

    let acao_recomendada = if necessaria && quantidade_sugerida > 0 {
        AcaoRecomendada::Comprar
    } else {
        AcaoRecomendada::Nenhuma
    };

    ReposicaoLocal {
        necessaria,
        ponto_reposicao: ponto,
        dias_restantes: dias,
        quantidade_sugerida,
        quantidade_para_full,
        quantidade_para_local,
        status: classificar_status(necessaria, dias, params.lead_time_fornecedor_dias),
        acao_recomendada,
    }
}

fn priorizar_acoes(
    params: &ParametrosReposicao,
    full: Option<&ReposicaoFull>,
    local: &ReposicaoLocal,
) -> Vec<AcaoPrioritaria> {
    let mut acoes = Vec::new();

    if let Some(full) = full {
        if full.acao_recomendada == AcaoRecomendada::Transferir && full.quantidade_sugerida > 0 {
            let prioridade = prioridade_de(full.status);
            acoes.push(AcaoPrioritaria {
                tipo: TipoAcao::Transferencia,
                quantidade: full.quantidade_sugerida,
                origem: LocalAcao::Local,
                destino: LocalAcao::Full,
                prazo: formatar_prazo(prioridade, params.lead_time_liberacao_full_dias),
                prioridade,
            });
        }
    }

    if local.acao_recomendada == AcaoRecomendada::Comprar {
        let prioridade = prioridade_de(local.status);
        acoes.push(AcaoPrioritaria {
            tipo: TipoAcao::Compra,
            quantidade: local.quantidade_sugerida,
            origem: LocalAcao::Fornecedor,
            destino: LocalAcao::Local,
            prazo: formatar_prazo(prioridade, params.lead_time_fornecedor_dias),
            prioridade,
        });
    }

    // Mais severo primeiro; em empate, transferência antes de compra
    // (resolve dentro do prazo de liberação, que é o mais curto).
    acoes.sort_by(|a, b| {
        b.prioridade
            .cmp(&a.prioridade)
            .then_with(|| ordem_tipo(a.tipo).cmp(&ordem_tipo(b.tipo)))
    });
    acoes
}

fn ordem_tipo(tipo: TipoAcao) -> u8 {
    match tipo {
        TipoAcao::Transferencia => 0,
        TipoAcao::Compra => 1,
    }
}

fn formatar_prazo(prioridade: Prioridade, lead_dias: i32) -> String {
    match prioridade {
        Prioridade::Urgente => "imediato".to_string(),
        _ => format!("em até {} dias", lead_dias),
    }
}

/// Calcula a sugestão completa de reposição para um snapshot de estoque,
/// vendas e configuração. Função pura: mesma entrada, mesma saída.
pub fn calcular_sugestao(params: &ParametrosReposicao) -> SugestaoReposicao {
    let media_diaria = calcular_media_diaria(params.total_vendido_janela, params.janela_dias);

    // Anúncio só-local não tem caminho Full para repor.
    let reposicao_full = params
        .tipo_anuncio
        .tem_full()
        .then(|| avaliar_caminho_full(params, media_diaria));

    let faltante_full = reposicao_full
        .as_ref()
        .filter(|f| f.acao_recomendada == AcaoRecomendada::AguardarCompra)
        .map(|f| f.quantidade_sugerida)
        .unwrap_or(0);

    let reposicao_local = avaliar_caminho_local(params, media_diaria, faltante_full);

    let acoes_prioritarias = priorizar_acoes(params, reposicao_full.as_ref(), &reposicao_local);

    let status_geral = reposicao_full
        .as_ref()
        .map(|f| f.status)
        .unwrap_or(StatusReposicao::Ok)
        .max(reposicao_local.status);

    SugestaoReposicao {
        tipo_anuncio: params.tipo_anuncio,
        estoque_local: params.estoque_local,
        estoque_full: params.estoque_full,
        estoque_total: params.estoque_local + params.estoque_full,
        media_vendas_90d: params.total_vendido_janela,
        media_diaria: media_diaria.round_dp(2),
        reposicao_full,
        reposicao_local,
        acoes_prioritarias,
        status_geral,
    }
}

// ---
// Serviço: monta o snapshot a partir dos repositórios e delega ao núcleo puro
// ---
#[derive(Clone)]
pub struct ReposicaoService {
    produto_repo: ProdutoRepository,
    reposicao_repo: ReposicaoRepository,
}

impl ReposicaoService {
    pub fn new(produto_repo: ProdutoRepository, reposicao_repo: ReposicaoRepository) -> Self {
        Self {
            produto_repo,
            reposicao_repo,
        }
    }

    pub async fn sugestao_para_produto(
        &self,
        produto_id: Uuid,
    ) -> Result<SugestaoReposicao, AppError> {
        let produto = self
            .produto_repo
            .find_by_id(produto_id)
            .await?
            .ok_or(AppError::ProdutoNotFound)?;

        let params = self.montar_parametros(&produto).await?;
        Ok(calcular_sugestao(&params))
    }

    pub async fn config_efetiva(
        &self,
        produto_id: Uuid,
    ) -> Result<ConfiguracaoReposicao, AppError> {
        self.reposicao_repo.config_efetiva(produto_id).await
    }

    pub async fn salvar_config(
        &self,
        produto_id: Uuid,
        config: &ConfiguracaoReposicao,
    ) -> Result<ConfiguracaoReposicao, AppError> {
        self.reposicao_repo.upsert_config(produto_id, config).await
    }

    // Snapshot de leitura: estoque, vendas agregadas e configuração efetiva.
    // Linhas ausentes viram zero em vez de erro — a sugestão é total.
    async fn montar_parametros(&self, produto: &Produto) -> Result<ParametrosReposicao, AppError> {
        let config = self.reposicao_repo.config_efetiva(produto.id).await?;
        let (estoque_local, estoque_full) = self.produto_repo.saldo_por_local(produto.id).await?;

        let (total_vendido_janela, janela_dias) = self
            .produto_repo
            .vendas_agregadas(produto.id)
            .await?
            .map(|v| (v.total_unidades, v.janela_dias))
            .unwrap_or((0, config.janela_vendas_dias));

        // Janela inválida é dado corrompido da sincronização, não caso de negócio.
        if janela_dias <= 0 {
            return Err(AppError::InvalidConfiguration(
                "A janela de vendas agregadas deve ser positiva.".to_string(),
            ));
        }

        Ok(ParametrosReposicao {
            tipo_anuncio: produto.tipo_anuncio,
            estoque_local,
            estoque_full,
            total_vendido_janela,
            janela_dias,
            lead_time_fornecedor_dias: config.lead_time_fornecedor_dias,
            lead_time_liberacao_full_dias: config.lead_time_liberacao_full_dias,
            estoque_seguranca: config.estoque_seguranca,
            cobertura_minima_dias: config.cobertura_minima_dias,
        })
    }

    /// Painel do catálogo inteiro, ordenado do mais severo para o mais saudável.
    pub async fn painel(&self) -> Result<PainelReposicao, AppError> {
        let produtos = self.produto_repo.find_all().await?;

        let mut itens = Vec::with_capacity(produtos.len());
        for produto in &produtos {
            let params = self.montar_parametros(produto).await?;
            itens.push(ItemPainel {
                produto_id: produto.id,
                sku: produto.sku.clone(),
                nome: produto.nome.clone(),
                sugestao: calcular_sugestao(&params),
            });
        }

        itens.sort_by(|a, b| b.sugestao.status_geral.cmp(&a.sugestao.status_geral));

        let criticos = contar(&itens, StatusReposicao::Critico);
        let atencao = contar(&itens, StatusReposicao::Atencao);
        let ok = contar(&itens, StatusReposicao::Ok);

        Ok(PainelReposicao {
            total_produtos: itens.len(),
            criticos,
            atencao,
            ok,
            itens,
        })
    }
}

fn contar(itens: &[ItemPainel], status: StatusReposicao) -> usize {
    itens
        .iter()
        .filter(|i| i.sugestao.status_geral == status)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::produto::TipoAnuncio;
    use rust_decimal::Decimal;

    fn params_base() -> ParametrosReposicao {
        ParametrosReposicao {
            tipo_anuncio: TipoAnuncio::Ambos,
            estoque_local: 0,
            estoque_full: 0,
            total_vendido_janela: 0,
            janela_dias: 90,
            lead_time_fornecedor_dias: 7,
            lead_time_liberacao_full_dias: 3,
            estoque_seguranca: 10,
            cobertura_minima_dias: 30,
        }
    }

    #[test]
    fn media_diaria_e_total_sobre_janela() {
        assert_eq!(calcular_media_diaria(90, 90), Decimal::ONE);
        assert_eq!(calcular_media_diaria(180, 90), Decimal::from(2));
        assert_eq!(calcular_media_diaria(0, 90), Decimal::ZERO);
        // Janela inválida degrada para demanda zero em vez de dividir.
        assert_eq!(calcular_media_diaria(100, 0), Decimal::ZERO);
        assert_eq!(calcular_media_diaria(100, -5), Decimal::ZERO);
    }

    #[test]
    fn pontos_de_reposicao_nunca_abaixo_da_seguranca() {
        for total in [0i64, 10, 90, 450, 9000] {
            let params = ParametrosReposicao {
                total_vendido_janela: total,
                ..params_base()
            };
            let media = calcular_media_diaria(total, params.janela_dias);
            assert!(ponto_reposicao_local(media, &params) >= params.estoque_seguranca);
            assert!(ponto_reposicao_full(media, &params) >= params.estoque_seguranca);
        }
    }

    #[test]
    fn demanda_zero_degrada_para_piso_de_seguranca_e_dias_ilimitados() {
        let params = params_base();
        let media = calcular_media_diaria(0, 90);

        assert_eq!(ponto_reposicao_local(media, &params), 10);
        assert_eq!(ponto_reposicao_full(media, &params), 10);
        assert_eq!(dias_restantes(500, media), DiasRestantes::Ilimitado);
        assert_eq!(dias_restantes(0, media), DiasRestantes::Ilimitado);
    }

    #[test]
    fn dias_restantes_arredonda_para_baixo() {
        let media = calcular_media_diaria(180, 90); // 2 por dia
        assert_eq!(dias_restantes(5, media), DiasRestantes::Dias(2));
        assert_eq!(dias_restantes(0, media), DiasRestantes::Dias(0));
    }

    #[test]
    fn quantidades_sugeridas_nunca_negativas() {
        // Estoques altíssimos com demanda baixa não podem gerar sugestão negativa.
        let casos = [
            (0i64, 0i64, 0i64),
            (5000, 5000, 90),
            (0, 5000, 900),
            (5000, 0, 900),
            (3, 7, 1),
        ];
        for (local, full, vendido) in casos {
            let params = ParametrosReposicao {
                estoque_local: local,
                estoque_full: full,
                total_vendido_janela: vendido,
                ..params_base()
            };
            let sugestao = calcular_sugestao(&params);
            if let Some(f) = &sugestao.reposicao_full {
                assert!(f.quantidade_sugerida >= 0);
            }
            assert!(sugestao.reposicao_local.quantidade_sugerida >= 0);
            assert!(sugestao.reposicao_local.quantidade_para_full >= 0);
            assert!(sugestao.reposicao_local.quantidade_para_local >= 0);
        }
    }

    #[test]
    fn full_acima_do_ponto_nao_precisa_de_nada() {
        let params = ParametrosReposicao {
            estoque_local: 100,
            estoque_full: 100, // ponto full = 1*3 + 10 = 13
            total_vendido_janela: 90,
            ..params_base()
        };
        let full = calcular_sugestao(&params).reposicao_full.unwrap();
        assert!(!full.necessaria);
        assert_eq!(full.acao_recomendada, AcaoRecomendada::Nenhuma);
        assert_eq!(full.quantidade_sugerida, 0);
        assert_eq!(full.status, StatusReposicao::Ok);
    }

    #[test]
    fn transferencia_viavel_recomenda_transferir() {
        // media 1/dia; ponto full 13; alvo full 40; falta 40 - 13 = 27 <= local 30.
        let params = ParametrosReposicao {
            estoque_local: 30,
            estoque_full: 13,
            total_vendido_janela: 90,
            ..params_base()
        };
        let full = calcular_sugestao(&params).reposicao_full.unwrap();
        assert!(full.necessaria);
        assert_eq!(full.quantidade_sugerida, 27);
        assert!(full.tem_estoque_local);
        assert_eq!(full.acao_recomendada, AcaoRecomendada::Transferir);
    }

    #[test]
    fn transferencia_inviavel_aguarda_compra() {
        let params = ParametrosReposicao {
            estoque_local: 5,
            estoque_full: 2,
            total_vendido_janela: 90,
            ..params_base()
        };
        let sugestao = calcular_sugestao(&params);
        let full = sugestao.reposicao_full.unwrap();
        assert!(full.necessaria);
        assert!(!full.tem_estoque_local);
        assert_eq!(full.acao_recomendada, AcaoRecomendada::AguardarCompra);

        // A compra separa a parcela que o Full ficou devendo, limitada ao
        // tamanho da própria compra: alvo 40 - local 5 = 35, devendo 38.
        let local = &sugestao.reposicao_local;
        assert_eq!(full.quantidade_sugerida, 38);
        assert_eq!(local.quantidade_sugerida, 35);
        assert_eq!(local.quantidade_para_full, 35);
        assert_eq!(local.quantidade_para_local, 0);
        assert_eq!(
            local.quantidade_para_full + local.quantidade_para_local,
            local.quantidade_sugerida
        );
    }

    #[test]
    fn status_geral_e_o_mais_severo_dos_caminhos() {
        // Full saudável, Local crítico: o geral tem que ser crítico.
        let params = ParametrosReposicao {
            estoque_local: 0,
            estoque_full: 500,
            total_vendido_janela: 90,
            ..params_base()
        };
        let sugestao = calcular_sugestao(&params);
        assert_eq!(sugestao.reposicao_full.as_ref().unwrap().status, StatusReposicao::Ok);
        assert_eq!(sugestao.reposicao_local.status, StatusReposicao::Critico);
        assert_eq!(sugestao.status_geral, StatusReposicao::Critico);
    }

    #[test]
    fn calculo_e_idempotente() {
        let params = ParametrosReposicao {
            estoque_local: 17,
            estoque_full: 4,
            total_vendido_janela: 123,
            ..params_base()
        };
        assert_eq!(calcular_sugestao(&params), calcular_sugestao(&params));
    }

    #[test]
    fn anuncio_somente_local_nao_tem_caminho_full() {
        let params = ParametrosReposicao {
            tipo_anuncio: TipoAnuncio::Local,
            estoque_local: 100,
            total_vendido_janela: 90,
            ..params_base()
        };
        let sugestao = calcular_sugestao(&params);
        assert!(sugestao.reposicao_full.is_none());
        assert_eq!(sugestao.status_geral, sugestao.reposicao_local.status);
    }

    #[test]
    fn cenario_estoque_zerado_com_venda_constante() {
        // 90 vendidos em 90 dias = 1/dia; tudo zerado.
        let params = params_base();
        let params = ParametrosReposicao {
            total_vendido_janela: 90,
            ..params
        };
        let sugestao = calcular_sugestao(&params);

        assert_eq!(sugestao.media_diaria, Decimal::ONE);
        assert_eq!(sugestao.reposicao_local.ponto_reposicao, 47); // 1*(7+30) + 10
        let full = sugestao.reposicao_full.as_ref().unwrap();
        assert_eq!(full.ponto_reposicao, 13); // 1*3 + 10
        assert!(full.necessaria);
        assert!(sugestao.reposicao_local.necessaria);
        assert_eq!(sugestao.status_geral, StatusReposicao::Critico);
    }

    #[test]
    fn cenario_sem_vendas_e_estoque_alto_fica_ok() {
        let params = ParametrosReposicao {
            estoque_local: 500,
            estoque_full: 500,
            total_vendido_janela: 0,
            ..params_base()
        };
        let sugestao = calcular_sugestao(&params);

        let full = sugestao.reposicao_full.as_ref().unwrap();
        assert_eq!(full.ponto_reposicao, 10);
        assert_eq!(sugestao.reposicao_local.ponto_reposicao, 10);
        assert_eq!(full.dias_restantes, DiasRestantes::Ilimitado);
        assert_eq!(sugestao.reposicao_local.dias_restantes, DiasRestantes::Ilimitado);
        assert_eq!(sugestao.status_geral, StatusReposicao::Ok);
        assert!(sugestao.acoes_prioritarias.is_empty());
    }

    #[test]
    fn cenario_giro_alto_sem_saldo_local_aguarda_compra() {
        // 180 em 90 dias = 2/dia; ponto full = 2*3 + 10 = 16 > full 2.
        let params = ParametrosReposicao {
            estoque_local: 5,
            estoque_full: 2,
            total_vendido_janela: 180,
            ..params_base()
        };
        let full = calcular_sugestao(&params).reposicao_full.unwrap();
        assert_eq!(full.ponto_reposicao, 16);
        assert!(full.necessaria);
        // Alvo (2*30 + 10 = 70) excede o saldo local de 5: não dá para transferir.
        assert_eq!(full.quantidade_sugerida, 68);
        assert_eq!(full.acao_recomendada, AcaoRecomendada::AguardarCompra);
    }

    #[test]
    fn priorizacao_poe_transferencia_antes_de_compra_em_empate() {
        // Ambos os caminhos em atenção; transferência viável + compra sugerida.
        let params = ParametrosReposicao {
            estoque_local: 30,
            estoque_full: 13,
            total_vendido_janela: 90,
            ..params_base()
        };
        let sugestao = calcular_sugestao(&params);
        let acoes = &sugestao.acoes_prioritarias;

        assert_eq!(acoes.len(), 2);
        assert_eq!(acoes[0].tipo, TipoAcao::Transferencia);
        assert_eq!(acoes[0].origem, LocalAcao::Local);
        assert_eq!(acoes[0].destino, LocalAcao::Full);
        assert_eq!(acoes[1].tipo, TipoAcao::Compra);
        assert_eq!(acoes[1].origem, LocalAcao::Fornecedor);
        assert_eq!(acoes[0].prioridade, acoes[1].prioridade);
    }

    #[test]
    fn priorizacao_poe_urgente_antes_de_importante() {
        // Local crítico (0 dias de cobertura), Full em atenção com transferência
        // inviável não gera ação; forçamos um caso com compra urgente apenas.
        let params = ParametrosReposicao {
            estoque_local: 0,
            estoque_full: 13,
            total_vendido_janela: 90,
            ..params_base()
        };
        let sugestao = calcular_sugestao(&params);
        let acoes = &sugestao.acoes_prioritarias;

        assert_eq!(acoes.len(), 1);
        assert_eq!(acoes[0].tipo, TipoAcao::Compra);
        assert_eq!(acoes[0].prioridade, Prioridade::Urgente);
        assert_eq!(acoes[0].prazo, "imediato");
    }

    #[test]
    fn estoque_critico_quando_cobertura_menor_que_lead_time() {
        // 2/dia com 5 no local: 2 dias de cobertura < 7 de lead time.
        let params = ParametrosReposicao {
            estoque_local: 5,
            estoque_full: 500,
            total_vendido_janela: 180,
            ..params_base()
        };
        let sugestao = calcular_sugestao(&params);
        assert_eq!(sugestao.reposicao_local.dias_restantes, DiasRestantes::Dias(2));
        assert_eq!(sugestao.reposicao_local.status, StatusReposicao::Critico);
    }
}
