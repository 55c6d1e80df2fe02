use common::AnalysisTable;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub table: AnalysisTable,
}

#[function_component(AnalysisTableView)]
pub fn analysis_table(props: &Props) -> Html {
    let table = &props.table;

    html! {
        <>
            <h2>{&table.title}</h2>
            <table>
                <thead>
                    <tr>
                        { for table.headers().iter().map(|header| html! { <th>{*header}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for table.rows.iter().map(|[time, crowd, safety]| html! {
                        <tr>
                            <td>{time}</td>
                            <td>{crowd}</td>
                            <td>{safety}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </>
    }
}
