// tests/common/mod.rs
#![allow(dead_code)]

use std::{collections::VecDeque, sync::Mutex};

use alunos_viewer::api::{AlunoSource, ApiEndpoints};
use alunos_viewer::data::{ApiMessage, aluno::Aluno};
use alunos_viewer::error::{DecodeSnafu, ViewerError, ViewerResult};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use snafu::ResultExt;

/// One canned answer, handed out in order.
pub enum Canned {
    Body(&'static str),
    Status(u16),
}

pub struct FakeSource {
    endpoints: ApiEndpoints,
    answers: Mutex<VecDeque<Canned>>,
}

impl FakeSource {
    pub fn new(answers: impl IntoIterator<Item = Canned>) -> Self {
        Self {
            endpoints: ApiEndpoints::new(&Url::parse("http://localhost:8000").unwrap())
                .unwrap(),
            answers: Mutex::new(answers.into_iter().collect()),
        }
    }

    fn next<T: serde::de::DeserializeOwned>(&self, url: &Url) -> ViewerResult<T> {
        let answer = self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("fake source ran out of answers");

        match answer {
            Canned::Body(body) => {
                serde_json::from_str(body).context(DecodeSnafu { url: url.clone() })
            }
            Canned::Status(code) => Err(ViewerError::HttpStatus {
                status: StatusCode::from_u16(code).unwrap(),
                url: url.clone(),
            }),
        }
    }
}

#[async_trait]
impl AlunoSource for FakeSource {
    fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    async fn fetch_message(&self) -> ViewerResult<ApiMessage> {
        self.next(self.endpoints.root())
    }

    async fn fetch_alunos(&self) -> ViewerResult<Vec<Aluno>> {
        self.next(self.endpoints.alunos())
    }
}
